//! Maintenance estimate commands

use crate::error::{CliError, CliResult};
use crate::output::{format_value, print_json, OutputFormat};
use chrono::{DateTime, Utc};
use clap::Subcommand;
use grid_maintenance::AssetHealth;
use serde_json::json;
use std::time::Duration;

const SECS_PER_DAY: f64 = 86_400.0;

/// Maintenance subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum MaintenanceCommands {
    /// Probability of at least one failure within a horizon
    Risk {
        /// Failures per year
        #[arg(short, long, allow_negative_numbers = true)]
        rate: f64,

        /// Horizon in days
        #[arg(long, allow_negative_numbers = true)]
        horizon_days: f64,
    },

    /// Recommended next service date
    NextService {
        /// Last service time (RFC 3339)
        #[arg(long)]
        last_service: DateTime<Utc>,

        /// Nominal service interval in days
        #[arg(long, allow_negative_numbers = true)]
        interval_days: f64,

        /// Cumulative run hours
        #[arg(long, default_value_t = 0.0)]
        hours_run: f64,
    },
}

/// Day count to a duration. Non-positive counts clamp to zero, which the
/// estimators treat as "no horizon" / "no interval".
fn days_to_duration(name: &str, days: f64) -> CliResult<Duration> {
    if !days.is_finite() {
        return Err(CliError::InvalidInput(format!("{name} must be a finite number of days")));
    }
    if days <= 0.0 {
        return Ok(Duration::ZERO);
    }
    Duration::try_from_secs_f64(days * SECS_PER_DAY)
        .map_err(|e| CliError::InvalidInput(format!("{name}: {e}")))
}

/// Execute a maintenance command
pub fn execute(command: MaintenanceCommands, format: OutputFormat) -> CliResult<()> {
    match command {
        MaintenanceCommands::Risk { rate, horizon_days } => {
            let horizon = days_to_duration("horizon-days", horizon_days)?;
            let risk = grid_maintenance::failure_risk(rate, horizon);
            match format {
                OutputFormat::Json => print_json(&json!({
                    "failure_rate_per_year": rate,
                    "horizon_days": horizon_days,
                    "risk": risk,
                })),
                OutputFormat::Text => {
                    println!(
                        "Failure risk in {} days: {}",
                        format_value(horizon_days),
                        format_value(risk)
                    );
                    Ok(())
                }
            }
        }

        MaintenanceCommands::NextService {
            last_service,
            interval_days,
            hours_run,
        } => {
            let health = AssetHealth {
                hours_run,
                failure_rate_per_year: 0.0,
                last_service,
                service_interval: days_to_duration("interval-days", interval_days)?,
            };
            let next = grid_maintenance::next_service_date(&health);
            match format {
                OutputFormat::Json => print_json(&json!({
                    "last_service": last_service,
                    "bias": grid_maintenance::usage_bias(hours_run),
                    "next_service": next,
                })),
                OutputFormat::Text => {
                    println!("Next service date: {}", next.to_rfc3339());
                    Ok(())
                }
            }
        }
    }
}
