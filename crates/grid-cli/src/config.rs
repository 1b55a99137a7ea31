//! CLI configuration

use crate::error::{CliError, CliResult};
use grid_anomaly::DetectorConfig;
use grid_converter::Tier;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Base tariff rate per kWh when neither flag nor file supplies one.
pub const DEFAULT_RATE: f64 = 0.20;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GridConfig {
    /// Spike detector defaults
    #[serde(default)]
    pub detector: DetectorSection,

    /// Tariff defaults for cost conversion
    #[serde(default)]
    pub tariff: TariffSection,
}

/// `[detector]` table
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DetectorSection {
    /// Std-dev multiplier
    pub threshold: Option<f64>,

    /// Trailing window length
    pub window_size: Option<usize>,
}

/// `[tariff]` table
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TariffSection {
    /// Base rate per kWh
    pub rate: Option<f64>,

    /// Default tier name, resolved like `--tier`
    pub tier: Option<String>,
}

impl GridConfig {
    /// Load configuration from file.
    ///
    /// An explicit path must exist. The default path is optional and falls
    /// back to built-in defaults when absent.
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => {
                let p = PathBuf::from(p);
                if !p.exists() {
                    return Err(CliError::Config(format!(
                        "config file not found: {}",
                        p.display()
                    )));
                }
                p
            }
            None => match Self::default_config_path() {
                Some(p) if p.exists() => p,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(GridConfig::default());
                }
            },
        };

        let contents = std::fs::read_to_string(&config_path)?;
        let config: GridConfig = toml::from_str(&contents)?;
        debug!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("grid").join("config.toml"))
    }

    /// Detector parameters: flags override the file, the file overrides
    /// library defaults.
    pub fn detector_config(&self, threshold: Option<f64>, window_size: Option<usize>) -> DetectorConfig {
        let defaults = DetectorConfig::default();
        DetectorConfig::new(
            threshold
                .or(self.detector.threshold)
                .unwrap_or(defaults.threshold),
            window_size
                .or(self.detector.window_size)
                .unwrap_or(defaults.window_size),
        )
    }

    /// Tariff rate with flag override.
    pub fn rate(&self, rate: Option<f64>) -> f64 {
        rate.or(self.tariff.rate).unwrap_or(DEFAULT_RATE)
    }

    /// Tariff tier with flag override.
    pub fn tier(&self, tier: Option<&str>) -> Tier {
        tier.or(self.tariff.tier.as_deref())
            .map(Tier::from_name)
            .unwrap_or_default()
    }
}
