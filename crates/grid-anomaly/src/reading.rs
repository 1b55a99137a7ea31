//! The reading value type shared by both analyses.

use serde::{Deserialize, Serialize};

/// A single timestamped consumption measurement.
///
/// `timestamp` is an opaque epoch-like key. The detectors never interpret or
/// sort by it; sequence order is whatever the caller supplies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub consumption: f64,
    pub timestamp: i64,
}

impl Reading {
    pub fn new(consumption: f64, timestamp: i64) -> Self {
        Self {
            consumption,
            timestamp,
        }
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.consumption, self.timestamp)
    }
}
