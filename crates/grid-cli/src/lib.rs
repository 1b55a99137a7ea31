//! grid CLI - Command-line interface for energy grid analytics
//!
//! This CLI gives operators a terminal front end to:
//! - Detect consumption spikes and IQR outliers in reading series
//! - Aggregate timestamped points (sum, average, moving average, daily totals)
//! - Convert energy units, tariff costs and efficiencies
//! - Estimate failure risk and next service dates
//! - Run a self-contained demo over sample data

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod input;
mod output;

use commands::aggregate::AggregateArgs;
use commands::convert::ConvertCommands;
use commands::detect::{SourceArgs, SpikeArgs};
use commands::maintenance::MaintenanceCommands;
use commands::{aggregate, convert, demo, detect, maintenance};
pub use config::GridConfig;
pub use error::{CliError, CliResult};
pub use input::{daily_readings, readings_from_points};
pub use output::OutputFormat;

/// grid CLI application
#[derive(Parser, Debug)]
#[command(name = "grid")]
#[command(about = "Energy grid analytics - aggregation, anomaly detection and maintenance estimates", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "GRID_CONFIG", global = true)]
    config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the built-in walkthrough over sample data
    Demo,

    /// Flag readings that deviate from their trailing window
    Spikes {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        params: SpikeArgs,
    },

    /// Flag readings outside the Tukey IQR fences
    Outliers {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Run spike and outlier detection together
    Analyze {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        params: SpikeArgs,
    },

    /// Sum, average, moving average and daily totals of points
    Aggregate(AggregateArgs),

    /// Unit, cost and efficiency conversions
    Convert {
        #[command(subcommand)]
        command: ConvertCommands,
    },

    /// Failure risk and service scheduling
    #[command(alias = "maint")]
    Maintenance {
        #[command(subcommand)]
        command: MaintenanceCommands,
    },

    /// Show effective configuration
    Config,
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // Load config
    let config = GridConfig::load(cli.config.as_deref())?;
    let format = cli.output;

    // Execute command
    match cli.command {
        Commands::Demo => demo::execute(format),
        Commands::Spikes { source, params } => detect::spikes(
            &source,
            config.detector_config(params.threshold, params.window),
            format,
        ),
        Commands::Outliers { source } => detect::outliers(&source, format),
        Commands::Analyze { source, params } => detect::analyze(
            &source,
            config.detector_config(params.threshold, params.window),
            format,
        ),
        Commands::Aggregate(args) => aggregate::execute(&args, format),
        Commands::Convert { command } => convert::execute(command, &config, format),
        Commands::Maintenance { command } => maintenance::execute(command, format),
        Commands::Config => match format {
            OutputFormat::Json => output::print_json(&config),
            OutputFormat::Text => {
                let effective = config.detector_config(None, None);
                println!(
                    "Config file: {}",
                    cli.config
                        .clone()
                        .or_else(|| GridConfig::default_config_path()
                            .map(|p| p.display().to_string()))
                        .unwrap_or_else(|| "(none)".into())
                );
                println!("Threshold: {}", effective.threshold);
                println!("Window size: {}", effective.window_size);
                println!("Tariff rate: {}", config.rate(None));
                println!("Tariff tier: {}", config.tier(None));
                print!("{}", toml::to_string_pretty(&config)?);
                Ok(())
            }
        },
    }
}
