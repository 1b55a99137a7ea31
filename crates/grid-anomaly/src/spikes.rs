//! Rolling z-score spike detection.
//!
//! Each reading at index `i >= window_size` is compared against the mean and
//! population standard deviation of the `window_size` readings immediately
//! before it. The reading itself is never part of its own window, so the first
//! `window_size` readings serve only as lookback context.

use tracing::{debug, trace};

use crate::reading::Reading;
use crate::stats::{mean, population_std_dev};

/// Flag readings whose consumption deviates from the trailing-window mean by
/// more than `threshold` population standard deviations.
///
/// Returns an empty vector when `window_size <= 1` or there are fewer than
/// `window_size` readings. Windows with zero standard deviation are skipped
/// regardless of the current value. Any `threshold` is accepted; a value of
/// zero or below flags every reading whose window has non-zero spread and
/// that differs from the window mean (or, for negative thresholds, all of
/// them).
///
/// Mean and variance are recomputed for every window, so there is no
/// running-sum drift over long inputs.
pub fn detect_spikes(readings: &[Reading], window_size: usize, threshold: f64) -> Vec<Reading> {
    if window_size <= 1 || readings.len() < window_size {
        debug!(
            readings = readings.len(),
            window_size, "spike detection skipped: not enough data for a window"
        );
        return Vec::new();
    }

    let mut spikes = Vec::new();
    for i in window_size..readings.len() {
        let window = &readings[i - window_size..i];
        let avg = mean(window);
        let std_dev = population_std_dev(window, avg);

        if std_dev == 0.0 {
            trace!(index = i, "zero-variance window, skipping");
            continue;
        }

        let current = readings[i];
        if (current.consumption - avg).abs() > threshold * std_dev {
            trace!(
                index = i,
                consumption = current.consumption,
                mean = avg,
                std_dev,
                "spike flagged"
            );
            spikes.push(current);
        }
    }

    debug!(
        readings = readings.len(),
        window_size,
        threshold,
        flagged = spikes.len(),
        "spike detection complete"
    );
    spikes
}
