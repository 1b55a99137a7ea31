//! Tukey IQR outlier detection.
//!
//! Quartiles are computed once over the whole input (not windowed) and any
//! reading strictly outside `[Q1 - 1.5·IQR, Q3 + 1.5·IQR]` is an outlier.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

use crate::reading::Reading;
use crate::stats::percentile;
use crate::{IQR_FENCE_MULTIPLIER, MIN_OUTLIER_READINGS};

/// Quartiles and the Tukey fences derived from them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TukeyFences {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

impl TukeyFences {
    /// Compute fences from unsorted consumption values.
    ///
    /// Returns `None` for fewer than four values.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.len() < MIN_OUTLIER_READINGS {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(nan_first);

        let q1 = percentile(&sorted, 25.0);
        let q3 = percentile(&sorted, 75.0);
        let iqr = q3 - q1;

        Some(Self {
            q1,
            q3,
            iqr,
            lower: q1 - IQR_FENCE_MULTIPLIER * iqr,
            upper: q3 + IQR_FENCE_MULTIPLIER * iqr,
        })
    }

    /// Compute fences over the consumption values of `readings`.
    pub fn from_readings(readings: &[Reading]) -> Option<Self> {
        let values: Vec<f64> = readings.iter().map(|r| r.consumption).collect();
        Self::from_values(&values)
    }

    /// Whether `value` lies inside the fences (bounds inclusive).
    pub fn contains(&self, value: f64) -> bool {
        !(value < self.lower || value > self.upper)
    }
}

/// Ascending order with NaN ahead of every number.
fn nan_first(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.total_cmp(b),
    }
}

/// Return readings whose consumption falls strictly outside the Tukey fences,
/// in their original order.
///
/// Fewer than four readings yields an empty vector. NaN consumptions sort
/// ahead of all numbers when the quartiles are taken and are never flagged.
pub fn detect_outliers(readings: &[Reading]) -> Vec<Reading> {
    let Some(fences) = TukeyFences::from_readings(readings) else {
        debug!(
            readings = readings.len(),
            "outlier detection skipped: quartiles need at least {} readings", MIN_OUTLIER_READINGS
        );
        return Vec::new();
    };

    debug!(
        q1 = fences.q1,
        q3 = fences.q3,
        lower = fences.lower,
        upper = fences.upper,
        "tukey fences computed"
    );

    let outliers: Vec<Reading> = readings
        .iter()
        .filter(|r| !fences.contains(r.consumption))
        .copied()
        .collect();

    debug!(
        readings = readings.len(),
        flagged = outliers.len(),
        "outlier detection complete"
    );
    outliers
}
