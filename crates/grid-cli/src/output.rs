//! Output formatting

use crate::error::CliResult;
use clap::ValueEnum;
use grid_anomaly::Reading;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text and tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Table row for reading display
#[derive(Debug, Serialize, Tabled)]
pub struct ReadingRow {
    /// Position in the input
    index: usize,
    /// Opaque timestamp key
    timestamp: i64,
    /// Consumption value
    consumption: String,
}

/// Rows for `flagged`, each annotated with its position in `readings`.
///
/// Positions are matched in order, so repeated identical readings resolve to
/// successive occurrences.
pub fn reading_rows(readings: &[Reading], flagged: &[Reading]) -> Vec<ReadingRow> {
    let mut cursor = 0;
    flagged
        .iter()
        .map(|f| {
            let rest = readings.get(cursor..).unwrap_or(&[]);
            let index = match rest.iter().position(|r| r == f) {
                Some(offset) => cursor + offset,
                None => {
                    debug_assert!(false, "flagged reading {f} not found in input");
                    cursor
                }
            };
            cursor = index + 1;
            ReadingRow {
                index,
                timestamp: f.timestamp,
                consumption: format_value(f.consumption),
            }
        })
        .collect()
}

/// Print rows as a table, or a placeholder when empty.
pub fn print_table<T: Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!("(none)");
        return;
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Compact decimal rendering that drops a trailing `.0`.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.4}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
