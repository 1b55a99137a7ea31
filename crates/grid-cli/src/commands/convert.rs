//! Unit, cost and efficiency conversion commands

use crate::config::GridConfig;
use crate::error::CliResult;
use crate::output::{format_value, print_json, OutputFormat};
use clap::Subcommand;
use serde_json::json;

/// Convert subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConvertCommands {
    /// Convert kilowatt-hours to megawatt-hours
    Mwh {
        /// Energy in kWh
        #[arg(allow_negative_numbers = true)]
        kwh: f64,
    },

    /// Cost of an amount of energy under a tariff tier
    Cost {
        /// Energy in kWh
        #[arg(allow_negative_numbers = true)]
        kwh: f64,

        /// Base rate per kWh (defaults to the configured tariff)
        #[arg(short, long)]
        rate: Option<f64>,

        /// Tariff tier: peak, offpeak, or anything else for standard
        #[arg(long)]
        tier: Option<String>,
    },

    /// Output energy as a percentage of input energy
    Efficiency {
        /// Input energy in kWh
        #[arg(allow_negative_numbers = true)]
        input_kwh: f64,

        /// Output energy in kWh
        #[arg(allow_negative_numbers = true)]
        output_kwh: f64,
    },
}

/// Execute a convert command
pub fn execute(command: ConvertCommands, config: &GridConfig, format: OutputFormat) -> CliResult<()> {
    match command {
        ConvertCommands::Mwh { kwh } => {
            let mwh = grid_converter::kwh_to_mwh(kwh);
            match format {
                OutputFormat::Json => print_json(&json!({ "kwh": kwh, "mwh": mwh })),
                OutputFormat::Text => {
                    println!("{} kWh -> {} MWh", format_value(kwh), format_value(mwh));
                    Ok(())
                }
            }
        }

        ConvertCommands::Cost { kwh, rate, tier } => {
            let rate = config.rate(rate);
            let tier = config.tier(tier.as_deref());
            let cost = grid_converter::calculate_cost(kwh, rate, tier);
            match format {
                OutputFormat::Json => print_json(&json!({
                    "kwh": kwh,
                    "rate": rate,
                    "tier": tier,
                    "multiplier": tier.multiplier(),
                    "cost": cost,
                })),
                OutputFormat::Text => {
                    println!(
                        "Cost ({}, {} kWh @ {}): {}",
                        tier,
                        format_value(kwh),
                        format_value(rate),
                        format_value(cost)
                    );
                    Ok(())
                }
            }
        }

        ConvertCommands::Efficiency {
            input_kwh,
            output_kwh,
        } => {
            let efficiency = grid_converter::calculate_efficiency(input_kwh, output_kwh);
            match format {
                OutputFormat::Json => print_json(&json!({
                    "input_kwh": input_kwh,
                    "output_kwh": output_kwh,
                    "efficiency_percent": efficiency,
                })),
                OutputFormat::Text => {
                    println!(
                        "Efficiency (input {}, output {}): {}%",
                        format_value(input_kwh),
                        format_value(output_kwh),
                        format_value(efficiency)
                    );
                    Ok(())
                }
            }
        }
    }
}
