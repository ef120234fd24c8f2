use super::common::{johor_record, pipeline};
use crate::workflows::eligibility::scoring::{
    adult_equivalent_for_tests, raw_burden_score_for_tests,
};

#[test]
fn adult_equivalent_weights_children_lower() {
    assert!((adult_equivalent_for_tests(1, 0) - 1.0).abs() < 1e-9);
    assert!((adult_equivalent_for_tests(2, 0) - 1.5).abs() < 1e-9);
    assert!((adult_equivalent_for_tests(4, 2) - 2.1).abs() < 1e-9);
    assert!((adult_equivalent_for_tests(6, 4) - 2.7).abs() < 1e-9);
}

#[test]
fn adult_equivalent_assumes_at_least_one_adult() {
    // More children than members reported still counts one adult.
    assert!((adult_equivalent_for_tests(2, 5) - 2.5).abs() < 1e-9);
    assert!((adult_equivalent_for_tests(0, 0) - 1.0).abs() < 1e-9);
    assert!((adult_equivalent_for_tests(0, 3) - 1.9).abs() < 1e-9);
}

#[test]
fn raw_score_steps_are_upper_inclusive() {
    assert_eq!(raw_burden_score_for_tests(0.4), 50.0);
    assert_eq!(raw_burden_score_for_tests(1.0), 50.0);
    assert_eq!(raw_burden_score_for_tests(1.01), 70.0);
    assert_eq!(raw_burden_score_for_tests(1.2), 70.0);
    assert_eq!(raw_burden_score_for_tests(1.21), 90.0);
    assert_eq!(raw_burden_score_for_tests(1.5), 90.0);
    assert_eq!(raw_burden_score_for_tests(1.51), 100.0);
    assert_eq!(raw_burden_score_for_tests(9.0), 100.0);
}

#[test]
fn johor_household_scores_at_the_cap() {
    let (validator, engine) = pipeline();
    let result = engine.score(&validator.enrich(&johor_record()));

    assert_eq!(result.final_score, 100.0);
    assert_eq!(result.breakdown.base_score, 60.0);
    assert_eq!(result.breakdown.raw_burden_score, 100.0);
    assert_eq!(result.breakdown.documentation_score, 100.0);
    assert_eq!(result.breakdown.component_total, 100.0);
    assert!((result.adult_equivalent - 2.1).abs() < 1e-9);
    assert!(result.burden_ratio > 1.5);
    assert!(!result.disability_auto_qualified);
}

#[test]
fn mid_tier_household_lands_between_steps() {
    let (validator, engine) = pipeline();
    let mut record = johor_record();
    record.state = Some("Perak".to_string());
    record.income_bracket = Some("M3".to_string());
    record.household_size = Some(2);
    record.number_of_children = Some(0);
    record.is_signature_valid = Some(false);

    let result = engine.score(&validator.enrich(&record));

    assert_eq!(result.equivalent_income, 8700.0);
    assert_eq!(result.breakdown.base_score, 20.0);
    assert_eq!(result.breakdown.raw_burden_score, 50.0);
    assert_eq!(result.breakdown.documentation_score, 0.0);
    assert_eq!(result.final_score, 57.5);
}

#[test]
fn documentation_gate_is_all_or_nothing() {
    let (validator, engine) = pipeline();
    let mut record = johor_record();

    record.is_data_authentic = Some(false);
    let rejected = engine.score(&validator.enrich(&record));
    assert_eq!(rejected.breakdown.documentation_score, 0.0);

    record.is_data_authentic = None;
    let unattested = engine.score(&validator.enrich(&record));
    assert_eq!(unattested.breakdown.documentation_score, 0.0);

    record.is_data_authentic = Some(true);
    let attested = engine.score(&validator.enrich(&record));
    assert_eq!(attested.breakdown.documentation_score, 100.0);
    assert_eq!(
        attested.breakdown.component_total - rejected.breakdown.component_total,
        25.0
    );
}

#[test]
fn disability_short_circuits_to_exactly_full_score() {
    let (validator, engine) = pipeline();
    let mut record = johor_record();
    record.disability_status = Some(true);
    record.income_bracket = Some("T2".to_string());
    record.is_signature_valid = Some(false);

    let result = engine.score(&validator.enrich(&record));

    assert_eq!(result.final_score, 100.0);
    assert!(result.disability_auto_qualified);
    assert_eq!(result.breakdown.base_score, 0.0);
    assert_eq!(result.breakdown.raw_burden_score, 100.0);
    assert_eq!(result.breakdown.documentation_score, 0.0);
    assert_eq!(result.breakdown.component_total, 100.0);
    assert_eq!(result.burden_ratio, 0.0);
    assert_eq!(result.state_median_burden, 0.0);
}

#[test]
fn zero_survey_income_scores_at_the_floor_step() {
    let (validator, engine) = pipeline();
    let mut record = johor_record();
    record.state = Some("Perlis".to_string());
    record.income_bracket = Some("B1".to_string());

    let result = engine.score(&validator.enrich(&record));

    assert_eq!(result.equivalent_income, 0.0);
    assert_eq!(result.burden_ratio, 0.0);
    assert_eq!(result.breakdown.raw_burden_score, 50.0);
}

#[test]
fn final_scores_stay_within_bounds() {
    let (validator, engine) = pipeline();
    let brackets = ["B1", "B2", "B3", "B4", "M1", "M2", "M3", "M4", "T1", "T2"];

    for bracket in brackets {
        for docs in [Some(true), Some(false), None] {
            let mut record = johor_record();
            record.income_bracket = Some(bracket.to_string());
            record.is_signature_valid = docs;
            record.is_data_authentic = docs;

            let result = engine.score(&validator.enrich(&record));
            assert!(
                (0.0..=100.0).contains(&result.final_score),
                "bracket {bracket}, docs {docs:?}: {}",
                result.final_score
            );
        }
    }
}

#[test]
fn results_are_identical_across_runs() {
    let (validator, engine) = pipeline();
    let enriched = validator.enrich(&johor_record());

    let first = engine.score(&enriched);
    let second = engine.score(&enriched);

    assert_eq!(first, second);
}
