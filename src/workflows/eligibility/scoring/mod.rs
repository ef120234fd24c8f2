mod policy;
mod rules;

use std::sync::Arc;

use tracing::debug;

use super::domain::{EnrichedRecord, ScoreBreakdown, ScoringResult};
use crate::workflows::hies::ReferenceDataStore;

/// Deterministic burden scoring over the shared reference tables. Identical
/// records against the same store always produce identical results.
pub struct BurdenScoringEngine {
    store: Arc<ReferenceDataStore>,
}

impl BurdenScoringEngine {
    pub fn new(store: Arc<ReferenceDataStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<ReferenceDataStore> {
        &self.store
    }

    pub fn score(&self, record: &EnrichedRecord) -> ScoringResult {
        let adult_equivalent =
            rules::adult_equivalent(record.household_size, record.number_of_children);
        let equivalent_income = record.equivalent_income;
        let burden = rules::burden_index(adult_equivalent, equivalent_income);
        let base_score = policy::tier_base(record.macro_tier);

        // A registered disability qualifies the household outright. The
        // burden-versus-median stages are skipped; their fields read zero.
        if record.disability_status {
            return ScoringResult {
                final_score: policy::MAX_SCORE,
                breakdown: ScoreBreakdown {
                    base_score,
                    raw_burden_score: policy::MAX_SCORE,
                    documentation_score: 0.0,
                    component_total: policy::MAX_SCORE,
                },
                equivalent_income,
                adult_equivalent,
                burden_ratio: 0.0,
                state_median_burden: 0.0,
                disability_auto_qualified: true,
                missing_fields: record.missing_fields.clone(),
            };
        }

        let state_median_burden = self.store.median_burden(record.state.as_deref());
        let burden_ratio = rules::burden_ratio(burden, state_median_burden);
        let raw_burden_score = policy::raw_burden_score(burden_ratio);
        let documentation_score =
            policy::documentation_score(record.signature_valid, record.data_authentic);
        let component_total = raw_burden_score * policy::RAW_BURDEN_WEIGHT
            + documentation_score * policy::DOCUMENTATION_WEIGHT;
        let final_score = policy::round2((base_score + component_total).min(policy::MAX_SCORE));

        debug!(
            final_score,
            burden_ratio,
            tier = record.macro_tier.label(),
            "scored record"
        );

        ScoringResult {
            final_score,
            breakdown: ScoreBreakdown {
                base_score,
                raw_burden_score,
                documentation_score,
                component_total,
            },
            equivalent_income,
            adult_equivalent,
            burden_ratio,
            state_median_burden,
            disability_auto_qualified: false,
            missing_fields: record.missing_fields.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) fn raw_burden_score_for_tests(ratio: f64) -> f64 {
    policy::raw_burden_score(ratio)
}

#[cfg(test)]
pub(crate) fn adult_equivalent_for_tests(household_size: u32, children: u32) -> f64 {
    rules::adult_equivalent(household_size, children)
}
