//! Configuration-carrying front end over the two analyses.

use serde::{Deserialize, Serialize};

use crate::outliers::{detect_outliers, TukeyFences};
use crate::reading::Reading;
use crate::spikes::detect_spikes;

/// Parameters for spike detection.
///
/// The outlier analysis takes no parameters; its fence multiplier is fixed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Number of standard deviations a reading must exceed to be a spike.
    pub threshold: f64,
    /// Length of the trailing lookback window.
    pub window_size: usize,
}

impl DetectorConfig {
    pub fn new(threshold: f64, window_size: usize) -> Self {
        Self {
            threshold,
            window_size,
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: crate::DEFAULT_THRESHOLD,
            window_size: crate::DEFAULT_WINDOW_SIZE,
        }
    }
}

/// Both analyses over one input, plus the fences used for outliers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    pub spikes: Vec<Reading>,
    pub outliers: Vec<Reading>,
    /// `None` when the input was too short for quartiles.
    pub fences: Option<TukeyFences>,
}

impl AnomalyReport {
    pub fn is_clean(&self) -> bool {
        self.spikes.is_empty() && self.outliers.is_empty()
    }
}

/// Stateless detector bundling a [`DetectorConfig`].
#[derive(Clone, Debug, Default)]
pub struct AnomalyDetector {
    config: DetectorConfig,
}

impl AnomalyDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// See [`detect_spikes`].
    pub fn detect_spikes(&self, readings: &[Reading]) -> Vec<Reading> {
        detect_spikes(readings, self.config.window_size, self.config.threshold)
    }

    /// See [`detect_outliers`].
    pub fn detect_outliers(&self, readings: &[Reading]) -> Vec<Reading> {
        detect_outliers(readings)
    }

    /// Run both analyses independently over the same input.
    pub fn analyze(&self, readings: &[Reading]) -> AnomalyReport {
        AnomalyReport {
            spikes: self.detect_spikes(readings),
            outliers: self.detect_outliers(readings),
            fences: TukeyFences::from_readings(readings),
        }
    }
}
