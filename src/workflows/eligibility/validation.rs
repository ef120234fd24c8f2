use std::sync::Arc;

use tracing::warn;

use super::domain::{CitizenRecord, EnrichedRecord, MacroTier, SubBracket};
use crate::workflows::hies::ReferenceDataStore;

const DEFAULT_HOUSEHOLD_SIZE: u32 = 1;
const DEFAULT_CHILDREN: u32 = 0;

/// Intake gate producing enriched records. Incomplete submissions degrade
/// to documented fallbacks instead of being rejected; the gaps travel with
/// the record in `missing_fields`.
pub struct RecordValidator {
    store: Arc<ReferenceDataStore>,
}

impl RecordValidator {
    pub fn new(store: Arc<ReferenceDataStore>) -> Self {
        Self { store }
    }

    pub fn enrich(&self, record: &CitizenRecord) -> EnrichedRecord {
        let mut missing_fields = Vec::new();
        let mut low_confidence = false;

        if record.state.is_none() {
            missing_fields.push("state".to_string());
        }
        if record.income_bracket.is_none() {
            missing_fields.push("income_bracket".to_string());
        }
        if record.household_size.is_none() {
            missing_fields.push("household_size".to_string());
        }
        if record.number_of_children.is_none() {
            missing_fields.push("number_of_children".to_string());
        }

        let state = record.state.as_deref().map(|raw| {
            self.store
                .canonical_state(raw)
                .map(str::to_string)
                .unwrap_or_else(|| raw.trim().to_string())
        });

        let sub_bracket = record.income_bracket.as_deref().and_then(SubBracket::parse);
        if let Some(raw) = record.income_bracket.as_deref() {
            if sub_bracket.is_none() {
                low_confidence = true;
                warn!(
                    bracket = raw,
                    "unrecognized income bracket, defaulting tier to T20"
                );
            }
        }
        let macro_tier = sub_bracket.map(MacroTier::from).unwrap_or(MacroTier::T20);

        let (equivalent_income, income_provenance) =
            self.store.equivalent_income(state.as_deref(), sub_bracket);

        EnrichedRecord {
            citizen_id: record.citizen_id.clone(),
            state,
            sub_bracket,
            macro_tier,
            household_size: record.household_size.unwrap_or(DEFAULT_HOUSEHOLD_SIZE),
            number_of_children: record.number_of_children.unwrap_or(DEFAULT_CHILDREN),
            disability_status: record.disability_status.unwrap_or(false),
            signature_valid: record.is_signature_valid,
            data_authentic: record.is_data_authentic,
            equivalent_income,
            income_provenance,
            missing_fields,
            low_confidence,
        }
    }
}
