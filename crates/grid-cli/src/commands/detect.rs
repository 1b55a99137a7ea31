//! Spike and outlier detection commands

use crate::error::CliResult;
use crate::input::{daily_readings, read_json, readings_from_points};
use crate::output::{self, format_value, print_json, print_table, OutputFormat};
use clap::Args;
use grid_aggregator::Point;
use grid_anomaly::{AnomalyDetector, DetectorConfig, Reading, TukeyFences, MIN_OUTLIER_READINGS};
use tracing::info;

/// Where detection input comes from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// JSON file of readings (`-` for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Input holds aggregator points (`value`, RFC 3339 `timestamp`)
    #[arg(long)]
    pub points: bool,

    /// Roll points up to daily totals before detection (implies --points)
    #[arg(long)]
    pub daily: bool,
}

impl SourceArgs {
    /// Load readings, adapting aggregator points when requested.
    pub fn load(&self) -> CliResult<Vec<Reading>> {
        let readings = if self.daily {
            let points: Vec<Point> = read_json(&self.input)?;
            daily_readings(&points)
        } else if self.points {
            let points: Vec<Point> = read_json(&self.input)?;
            readings_from_points(&points)
        } else {
            read_json(&self.input)?
        };
        info!(count = readings.len(), input = %self.input, "loaded readings");
        Ok(readings)
    }
}

/// Spike detection parameter overrides
#[derive(Args, Debug, Clone, Default)]
pub struct SpikeArgs {
    /// Trailing window length
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Std-dev multiplier
    #[arg(short, long, allow_negative_numbers = true)]
    pub threshold: Option<f64>,
}

/// Execute `grid spikes`
pub fn spikes(source: &SourceArgs, config: DetectorConfig, format: OutputFormat) -> CliResult<()> {
    let readings = source.load()?;
    let spikes = AnomalyDetector::new(config).detect_spikes(&readings);

    match format {
        OutputFormat::Json => print_json(&spikes),
        OutputFormat::Text => {
            println!(
                "Spikes (window={}, threshold={}):",
                config.window_size,
                format_value(config.threshold)
            );
            print_table(output::reading_rows(&readings, &spikes));
            Ok(())
        }
    }
}

/// Execute `grid outliers`
pub fn outliers(source: &SourceArgs, format: OutputFormat) -> CliResult<()> {
    let readings = source.load()?;
    let outliers = grid_anomaly::detect_outliers(&readings);

    match format {
        OutputFormat::Json => print_json(&outliers),
        OutputFormat::Text => {
            print_fences(TukeyFences::from_readings(&readings).as_ref());
            println!("Outliers:");
            print_table(output::reading_rows(&readings, &outliers));
            Ok(())
        }
    }
}

/// Execute `grid analyze`
pub fn analyze(source: &SourceArgs, config: DetectorConfig, format: OutputFormat) -> CliResult<()> {
    let readings = source.load()?;
    let report = AnomalyDetector::new(config).analyze(&readings);

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            println!("Readings: {}", readings.len());
            println!(
                "Spikes (window={}, threshold={}):",
                config.window_size,
                format_value(config.threshold)
            );
            print_table(output::reading_rows(&readings, &report.spikes));
            print_fences(report.fences.as_ref());
            println!("Outliers:");
            print_table(output::reading_rows(&readings, &report.outliers));
            if report.is_clean() {
                println!("No anomalies detected.");
            }
            Ok(())
        }
    }
}

fn print_fences(fences: Option<&TukeyFences>) {
    match fences {
        Some(f) => println!(
            "Q1={} Q3={} IQR={} fences=[{}, {}]",
            format_value(f.q1),
            format_value(f.q3),
            format_value(f.iqr),
            format_value(f.lower),
            format_value(f.upper)
        ),
        None => println!(
            "Fences: n/a (need at least {} readings)",
            MIN_OUTLIER_READINGS
        ),
    }
}
