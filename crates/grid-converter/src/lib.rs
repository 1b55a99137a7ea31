//! # grid-converter
//!
//! Energy unit conversion plus tariff cost and conversion-efficiency helpers.

#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Kilowatt-hours per megawatt-hour.
pub const KWH_PER_MWH: f64 = 1000.0;

// ── Tariff tiers ────────────────────────────────────────────────────────

/// Tariff tier applied on top of the base rate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Peak hours, 1.5× the base rate.
    Peak,
    /// Off-peak hours, 0.7× the base rate.
    OffPeak,
    /// Base rate.
    #[default]
    Standard,
}

impl Tier {
    /// Multiplier applied to the base rate.
    pub fn multiplier(self) -> f64 {
        match self {
            Tier::Peak => 1.5,
            Tier::OffPeak => 0.7,
            Tier::Standard => 1.0,
        }
    }

    /// Resolve a tier name. Anything other than exactly `peak` or `offpeak`
    /// is billed at the standard rate.
    pub fn from_name(name: &str) -> Self {
        match name {
            "peak" => Tier::Peak,
            "offpeak" => Tier::OffPeak,
            _ => Tier::Standard,
        }
    }
}

impl From<&str> for Tier {
    fn from(name: &str) -> Self {
        Tier::from_name(name)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Peak => write!(f, "peak"),
            Tier::OffPeak => write!(f, "offpeak"),
            Tier::Standard => write!(f, "standard"),
        }
    }
}

// ── Conversions ─────────────────────────────────────────────────────────

/// Convert kilowatt-hours to megawatt-hours.
pub fn kwh_to_mwh(kwh: f64) -> f64 {
    kwh / KWH_PER_MWH
}

/// Cost of `kwh` at `rate` per kWh, scaled by the tier multiplier.
pub fn calculate_cost(kwh: f64, rate: f64, tier: Tier) -> f64 {
    kwh * rate * tier.multiplier()
}

/// Output energy as a percentage of input energy. Zero input yields `0.0`.
pub fn calculate_efficiency(input_kwh: f64, output_kwh: f64) -> f64 {
    if input_kwh == 0.0 {
        return 0.0;
    }
    (output_kwh / input_kwh) * 100.0
}
