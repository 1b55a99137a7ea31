//! Small statistics helpers shared by the spike and outlier detectors.

use crate::reading::Reading;

/// Arithmetic mean of the window's consumption values.
///
/// Accumulated relative to the first value, so a constant window has a mean
/// exactly equal to that value (and therefore a standard deviation of zero).
/// Callers guarantee a non-empty window.
pub(crate) fn mean(window: &[Reading]) -> f64 {
    let origin = window[0].consumption;
    let offset: f64 = window.iter().map(|r| r.consumption - origin).sum();
    origin + offset / window.len() as f64
}

/// Population standard deviation (denominator `n`) around `mean`.
pub(crate) fn population_std_dev(window: &[Reading], mean: f64) -> f64 {
    let variance = window
        .iter()
        .map(|r| (r.consumption - mean).powi(2))
        .sum::<f64>()
        / window.len() as f64;
    variance.sqrt()
}

/// Percentile `p` (0..=100) of an ascending slice, linearly interpolated
/// between the two nearest order statistics. Empty input yields `0.0`.
pub(crate) fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let index = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    sorted[lower] + (sorted[upper] - sorted[lower]) * (index - lower as f64)
}
