//! # grid-maintenance
//!
//! Predictive maintenance helpers for grid assets:
//!
//! - [`failure_risk`]: probability of at least one failure within a horizon,
//!   assuming failures arrive as a Poisson process (exponential
//!   inter-arrival times) with a constant yearly rate.
//! - [`next_service_date`]: fixed service interval, shortened for assets
//!   with high cumulative run hours.

#![deny(unsafe_code)]

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hours in a (non-leap) year, the unit of the failure rate.
pub const HOURS_PER_YEAR: f64 = 24.0 * 365.0;

/// Run hours above which the service interval is cut to 80%.
pub const HEAVY_USE_HOURS: f64 = 4000.0;

/// Run hours above which the service interval is cut to 90%.
pub const MODERATE_USE_HOURS: f64 = 2000.0;

/// Minimal telemetry for an asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetHealth {
    /// Cumulative run hours.
    pub hours_run: f64,
    /// Expected failures per year (λ of the exponential model).
    pub failure_rate_per_year: f64,
    pub last_service: DateTime<Utc>,
    pub service_interval: Duration,
}

/// Probability of at least one failure within `horizon`: `1 - e^(-λt)` with
/// `t` in years.
///
/// A non-positive rate or a zero horizon yields `0.0`.
pub fn failure_risk(lambda_per_year: f64, horizon: Duration) -> f64 {
    if lambda_per_year <= 0.0 || horizon.is_zero() {
        return 0.0;
    }
    let years = horizon.as_secs_f64() / 3600.0 / HOURS_PER_YEAR;
    1.0 - (-lambda_per_year * years).exp()
}

/// Fraction of the nominal interval to keep, given cumulative run hours.
pub fn usage_bias(hours_run: f64) -> f64 {
    if hours_run > HEAVY_USE_HOURS {
        0.8
    } else if hours_run > MODERATE_USE_HOURS {
        0.9
    } else {
        1.0
    }
}

/// Recommended next service date: `last_service` plus the service interval
/// scaled by [`usage_bias`].
///
/// A zero interval returns `last_service` unchanged. A date past the end of
/// the representable range saturates to the maximum UTC timestamp.
pub fn next_service_date(health: &AssetHealth) -> DateTime<Utc> {
    if health.service_interval.is_zero() {
        debug!("zero service interval, next service equals last service");
        return health.last_service;
    }

    let bias = usage_bias(health.hours_run);
    let adjusted = health.service_interval.mul_f64(bias);
    debug!(
        hours_run = health.hours_run,
        bias,
        adjusted_secs = adjusted.as_secs(),
        "service interval adjusted for usage"
    );

    TimeDelta::from_std(adjusted)
        .ok()
        .and_then(|delta| health.last_service.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
