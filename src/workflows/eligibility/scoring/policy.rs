//! Score tables and weights for the burden rubric.

use super::super::domain::MacroTier;

pub(crate) const RAW_BURDEN_WEIGHT: f64 = 0.75;
pub(crate) const DOCUMENTATION_WEIGHT: f64 = 0.25;
pub(crate) const MAX_SCORE: f64 = 100.0;

/// Piecewise score over the burden ratio. Boundaries are upper-inclusive,
/// so a household exactly at the state median earns the bottom step.
pub(crate) fn raw_burden_score(ratio: f64) -> f64 {
    if ratio <= 1.0 {
        50.0
    } else if ratio <= 1.2 {
        70.0
    } else if ratio <= 1.5 {
        90.0
    } else {
        100.0
    }
}

/// Base score for the macro income tier.
pub(crate) const fn tier_base(tier: MacroTier) -> f64 {
    match tier {
        MacroTier::B40 => 60.0,
        MacroTier::M40Lower => 40.0,
        MacroTier::M40Upper => 20.0,
        MacroTier::T20 => 0.0,
    }
}

/// Documentation credit is all-or-nothing: both attestations must be
/// present and true.
pub(crate) fn documentation_score(
    signature_valid: Option<bool>,
    data_authentic: Option<bool>,
) -> f64 {
    match (signature_valid, data_authentic) {
        (Some(true), Some(true)) => 100.0,
        _ => 0.0,
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
