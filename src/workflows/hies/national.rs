use super::domain::SubBracket;
use super::normalizer::normalize_key;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Adult-equivalent size of the reference household used to express median
/// burden (two adults, two children under the 0.5/0.3 weights).
pub(crate) const REFERENCE_HOUSEHOLD_AE: f64 = 2.1;

/// National median monthly household income, DOSM HIES 2022 (RM).
pub(crate) const NATIONAL_MEDIAN_INCOME: f64 = 6_338.0;

/// Income substituted when a record carries no usable bracket (RM).
pub(crate) const FALLBACK_INCOME: f64 = 5_000.0;

/// Median monthly gross household income per decile sub-bracket, national
/// series, DOSM HIES 2022 (RM).
pub(crate) const fn bracket_income(bracket: SubBracket) -> f64 {
    match bracket {
        SubBracket::B1 => 2_560.0,
        SubBracket::B2 => 3_439.0,
        SubBracket::B3 => 4_309.0,
        SubBracket::B4 => 5_249.0,
        SubBracket::M1 => 6_339.0,
        SubBracket::M2 => 7_689.0,
        SubBracket::M3 => 9_449.0,
        SubBracket::M4 => 11_819.0,
        SubBracket::T1 => 15_869.0,
        SubBracket::T2 => 20_000.0,
    }
}

/// Median monthly household income by state and federal territory, DOSM
/// HIES 2022 (RM). Shared with the normalizer as the canonical spellings.
pub(crate) const STATE_MEDIAN_INCOME: &[(&str, f64)] = &[
    ("Johor", 6_879.0),
    ("Kedah", 4_402.0),
    ("Kelantan", 3_614.0),
    ("Melaka", 6_210.0),
    ("Negeri Sembilan", 5_055.0),
    ("Pahang", 4_753.0),
    ("Perak", 4_494.0),
    ("Perlis", 4_713.0),
    ("Pulau Pinang", 6_502.0),
    ("Sabah", 4_577.0),
    ("Sarawak", 4_978.0),
    ("Selangor", 9_983.0),
    ("Terengganu", 4_834.0),
    ("W.P. Kuala Lumpur", 10_234.0),
    ("W.P. Labuan", 5_928.0),
    ("W.P. Putrajaya", 10_056.0),
];

static STATE_MEDIAN_BURDEN: OnceLock<HashMap<String, f64>> = OnceLock::new();

/// Median burden (reference household AE per ringgit of median income) for
/// a state, keyed by its normalized name.
pub(crate) fn state_median_burden(state_key: &str) -> Option<f64> {
    state_median_burden_map().get(state_key).copied()
}

pub(crate) fn national_median_burden() -> f64 {
    REFERENCE_HOUSEHOLD_AE / NATIONAL_MEDIAN_INCOME
}

fn state_median_burden_map() -> &'static HashMap<String, f64> {
    STATE_MEDIAN_BURDEN.get_or_init(|| {
        let mut map = HashMap::with_capacity(STATE_MEDIAN_INCOME.len());
        for (state, median_income) in STATE_MEDIAN_INCOME {
            map.insert(normalize_key(state), REFERENCE_HOUSEHOLD_AE / median_income);
        }
        map
    })
}
