//! Aggregation command

use crate::error::CliResult;
use crate::input::read_json;
use crate::output::{format_value, print_json, print_table, OutputFormat};
use clap::Args;
use grid_aggregator::Point;
use serde::Serialize;
use std::collections::BTreeMap;
use tabled::Tabled;

/// Arguments for `grid aggregate`
#[derive(Args, Debug, Clone)]
pub struct AggregateArgs {
    /// JSON file of points (`-` for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Moving-average window; omitted skips the moving average
    #[arg(short, long)]
    pub window: Option<usize>,
}

/// Aggregation results
#[derive(Debug, Serialize)]
struct AggregateSummary {
    count: usize,
    sum: f64,
    average: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    moving_average: Option<Vec<f64>>,
    daily_totals: BTreeMap<String, f64>,
}

/// Table row for daily totals
#[derive(Debug, Tabled)]
struct DayRow {
    /// Calendar day (UTC)
    day: String,
    /// Total for the day
    total: String,
}

/// Execute `grid aggregate`
pub fn execute(args: &AggregateArgs, format: OutputFormat) -> CliResult<()> {
    let points: Vec<Point> = read_json(&args.input)?;

    let summary = AggregateSummary {
        count: points.len(),
        sum: grid_aggregator::sum(&points),
        average: grid_aggregator::average(&points),
        moving_average: args
            .window
            .map(|w| grid_aggregator::moving_average(&points, w)),
        daily_totals: grid_aggregator::group_by_day(&points)
            .into_iter()
            .map(|(day, total)| (day.to_string(), total))
            .collect(),
    };

    match format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Text => {
            println!("Points: {}", summary.count);
            println!("Sum: {}", format_value(summary.sum));
            println!("Average: {}", format_value(summary.average));
            if let (Some(w), Some(ma)) = (args.window, &summary.moving_average) {
                let rendered: Vec<String> = ma.iter().map(|v| format_value(*v)).collect();
                println!("MovingAverage({}): [{}]", w, rendered.join(", "));
            }
            println!("Daily totals:");
            let rows: Vec<DayRow> = summary
                .daily_totals
                .iter()
                .map(|(day, total)| DayRow {
                    day: day.clone(),
                    total: format_value(*total),
                })
                .collect();
            print_table(rows);
            Ok(())
        }
    }
}
