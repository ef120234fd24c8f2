//! Household arithmetic feeding the score tables.

const OTHER_ADULT_WEIGHT: f64 = 0.5;
const CHILD_WEIGHT: f64 = 0.3;

/// OECD-style adult-equivalent size: the first adult counts in full,
/// further adults at 0.5, children at 0.3. At least one adult is assumed
/// even when the reported composition is inconsistent.
pub(crate) fn adult_equivalent(household_size: u32, children: u32) -> f64 {
    let adults = household_size.saturating_sub(children).max(1);
    1.0 + OTHER_ADULT_WEIGHT * (adults - 1) as f64 + CHILD_WEIGHT * children as f64
}

/// Burden carried per ringgit of representative income. Non-positive income
/// yields zero burden rather than a division error.
pub(crate) fn burden_index(adult_equivalent: f64, income: f64) -> f64 {
    if income <= 0.0 {
        return 0.0;
    }
    adult_equivalent / income
}

/// Household burden relative to the state median. A degenerate reference
/// pins the ratio at parity.
pub(crate) fn burden_ratio(burden: f64, reference: f64) -> f64 {
    if reference <= 0.0 {
        return 1.0;
    }
    burden / reference
}
