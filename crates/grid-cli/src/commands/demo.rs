//! Self-contained walkthrough of every crate in the workspace.
//!
//! Uses fixed sample data: four daily points ending now, six readings with one
//! spike at timestamp 4, and an asset last serviced 180 days ago.

use crate::error::CliResult;
use crate::output::{format_value, print_json, OutputFormat};
use chrono::{DateTime, TimeDelta, Utc};
use grid_aggregator::Point;
use grid_anomaly::{AnomalyDetector, DetectorConfig, Reading};
use grid_converter::Tier;
use grid_maintenance::AssetHealth;
use serde::Serialize;
use std::time::Duration;

const DAY_SECS: u64 = 24 * 3600;

#[derive(Debug, Serialize)]
struct DemoSummary {
    kwh_to_mwh: f64,
    peak_cost: f64,
    efficiency_percent: f64,
    sum: f64,
    average: f64,
    moving_average: Vec<f64>,
    spikes: Vec<Reading>,
    outliers: Vec<Reading>,
    failure_risk_90_days: f64,
    next_service: DateTime<Utc>,
}

fn sample_points(now: DateTime<Utc>) -> Vec<Point> {
    vec![
        Point::new(10.0, now - TimeDelta::hours(72)),
        Point::new(15.0, now - TimeDelta::hours(48)),
        Point::new(20.0, now - TimeDelta::hours(24)),
        Point::new(25.0, now),
    ]
}

fn sample_readings() -> Vec<Reading> {
    vec![
        Reading::new(10.0, 1),
        Reading::new(11.0, 2),
        Reading::new(10.0, 3),
        Reading::new(200.0, 4),
        Reading::new(12.0, 5),
        Reading::new(13.0, 6),
    ]
}

fn run(now: DateTime<Utc>) -> DemoSummary {
    let points = sample_points(now);
    let readings = sample_readings();
    let detector = AnomalyDetector::new(DetectorConfig::new(2.0, 3));

    let health = AssetHealth {
        hours_run: 2500.0,
        failure_rate_per_year: 0.3,
        last_service: now - TimeDelta::days(180),
        service_interval: Duration::from_secs(365 * DAY_SECS),
    };

    DemoSummary {
        kwh_to_mwh: grid_converter::kwh_to_mwh(5000.0),
        peak_cost: grid_converter::calculate_cost(100.0, 0.20, Tier::Peak),
        efficiency_percent: grid_converter::calculate_efficiency(120.0, 90.0),
        sum: grid_aggregator::sum(&points),
        average: grid_aggregator::average(&points),
        moving_average: grid_aggregator::moving_average(&points, 2),
        spikes: detector.detect_spikes(&readings),
        outliers: detector.detect_outliers(&readings),
        failure_risk_90_days: grid_maintenance::failure_risk(
            health.failure_rate_per_year,
            Duration::from_secs(90 * DAY_SECS),
        ),
        next_service: grid_maintenance::next_service_date(&health),
    }
}

fn render(readings: &[Reading]) -> String {
    let items: Vec<String> = readings.iter().map(Reading::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Execute `grid demo`
pub fn execute(format: OutputFormat) -> CliResult<()> {
    let summary = run(Utc::now());

    match format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Text => {
            println!("5,000 kWh -> MWh: {}", format_value(summary.kwh_to_mwh));
            println!("Cost (peak, 100 kWh @ 0.20): {}", format_value(summary.peak_cost));
            println!(
                "Efficiency (input 120, output 90): {}",
                format_value(summary.efficiency_percent)
            );
            println!("Sum: {}", format_value(summary.sum));
            println!("Average: {}", format_value(summary.average));
            let ma: Vec<String> = summary.moving_average.iter().map(|v| format_value(*v)).collect();
            println!("MovingAverage(2): [{}]", ma.join(", "));
            println!("Spikes: {}", render(&summary.spikes));
            println!("Outliers: {}", render(&summary.outliers));
            println!(
                "Failure risk in 90 days: {}",
                format_value(summary.failure_risk_90_days)
            );
            println!("Next service date: {}", summary.next_service.to_rfc3339());
            Ok(())
        }
    }
}
