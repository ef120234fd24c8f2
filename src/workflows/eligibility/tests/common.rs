use std::io::Cursor;
use std::sync::Arc;

use crate::workflows::eligibility::analysis::EligibilityAssessmentService;
use crate::workflows::eligibility::comparison::ResultComparator;
use crate::workflows::eligibility::domain::CitizenRecord;
use crate::workflows::eligibility::scoring::BurdenScoringEngine;
use crate::workflows::eligibility::validation::RecordValidator;
use crate::workflows::hies::ReferenceDataStore;

/// Small HIES extract shared by the workflow tests. The Perlis row keeps
/// a zero income and the Melaka row keeps a blank cell on purpose.
pub(super) const SURVEY_EXTRACT: &str = "state,income_group,income\n\
Johor,B1,2740.0\n\
Johor,B3,4480.0\n\
Kelantan,B2,2281.0\n\
Perak,M3,8700.0\n\
Perlis,B1,0.0\n\
Selangor,M1,8950.0\n\
W.P. Kuala Lumpur,B1,2930.0\n\
Melaka,B4,\n";

pub(super) fn store() -> Arc<ReferenceDataStore> {
    let store =
        ReferenceDataStore::from_reader(Cursor::new(SURVEY_EXTRACT)).expect("extract loads");
    Arc::new(store)
}

pub(super) fn validator() -> RecordValidator {
    RecordValidator::new(store())
}

pub(super) fn pipeline() -> (RecordValidator, BurdenScoringEngine) {
    let store = store();
    (
        RecordValidator::new(store.clone()),
        BurdenScoringEngine::new(store),
    )
}

pub(super) fn service() -> EligibilityAssessmentService {
    EligibilityAssessmentService::with_store(store(), ResultComparator::default())
}

pub(super) fn johor_record() -> CitizenRecord {
    CitizenRecord {
        citizen_id: Some("MY-880101-01-5521".to_string()),
        state: Some("Johor".to_string()),
        income_bracket: Some("B3".to_string()),
        household_size: Some(4),
        number_of_children: Some(2),
        disability_status: Some(false),
        is_signature_valid: Some(true),
        is_data_authentic: Some(true),
        age: Some(37),
        residency_duration_months: Some(96),
    }
}
