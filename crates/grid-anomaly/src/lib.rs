//! # grid-anomaly
//!
//! Anomaly detection over ordered energy-consumption readings.
//!
//! Two independent analyses share only the [`Reading`] type:
//!
//! ```text
//!   &[Reading]
//!       │
//!       ├──► detect_spikes   (trailing-window mean / population std-dev)
//!       │
//!       └──► detect_outliers (global Tukey fences over Q1/Q3)
//!             │
//!             ▼
//!       Vec<Reading>  (flagged readings, input order)
//! ```
//!
//! ## Behaviour on degenerate input
//!
//! Neither analysis ever fails. Too few readings, a window of one or less, or
//! a zero-variance window all produce "no anomalies". Callers that need to
//! tell "clean data" apart from "not enough data" must check the input length
//! themselves.
//!
//! ## Quick Start
//!
//! ```rust
//! use grid_anomaly::{AnomalyDetector, DetectorConfig, Reading};
//!
//! let readings: Vec<Reading> = [10.0, 11.0, 10.0, 200.0, 12.0, 13.0]
//!     .iter()
//!     .zip(1..)
//!     .map(|(&c, ts)| Reading::new(c, ts))
//!     .collect();
//!
//! let detector = AnomalyDetector::new(DetectorConfig::new(2.0, 3));
//! let spikes = detector.detect_spikes(&readings);
//! assert_eq!(spikes, vec![Reading::new(200.0, 4)]);
//! ```

#![deny(unsafe_code)]

pub mod detector;
pub mod outliers;
pub mod reading;
pub mod spikes;
mod stats;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use detector::{AnomalyDetector, AnomalyReport, DetectorConfig};
pub use outliers::{detect_outliers, TukeyFences};
pub use reading::Reading;
pub use spikes::detect_spikes;

/// Default std-dev multiplier for spike detection.
pub const DEFAULT_THRESHOLD: f64 = 3.0;

/// Default trailing window length (one day of hourly readings).
pub const DEFAULT_WINDOW_SIZE: usize = 24;

/// Minimum number of readings for quartiles to be computed.
pub const MIN_OUTLIER_READINGS: usize = 4;

/// Tukey fence multiplier applied to the interquartile range.
pub const IQR_FENCE_MULTIPLIER: f64 = 1.5;
