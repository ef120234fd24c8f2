use crate::workflows::eligibility::comparison::ResultComparator;
use crate::workflows::eligibility::domain::ContextualAssessment;

fn assessment(score: f64, confidence: f64) -> ContextualAssessment {
    ContextualAssessment { score, confidence }
}

#[test]
fn close_scores_reach_consensus() {
    let verdict = ResultComparator::default().compare(75.0, assessment(78.0, 0.85));

    assert!(verdict.agreement);
    assert_eq!(verdict.score_difference, 3.0);
    assert_eq!(verdict.rag_confidence, 0.85);
    assert!(verdict.recommendation.contains("Consensus: 76.5"));
    assert!(verdict.comment.contains("agree within"));
}

#[test]
fn boundary_difference_still_counts_as_agreement() {
    let verdict = ResultComparator::default().compare(70.0, assessment(75.0, 0.9));

    assert!(verdict.agreement);
    assert!(verdict.recommendation.contains("Consensus: 72.5"));
}

#[test]
fn moderate_gaps_keep_both_perspectives() {
    let verdict = ResultComparator::default().compare(70.0, assessment(78.0, 0.8));

    assert!(!verdict.agreement);
    assert_eq!(verdict.score_difference, 8.0);
    assert!(!verdict.recommendation.contains("manual review"));
    assert!(verdict.comment.contains("Moderate"));
}

#[test]
fn fifteen_point_gap_is_not_yet_manual_review() {
    let verdict = ResultComparator::default().compare(70.0, assessment(85.0, 0.8));

    assert!(!verdict.agreement);
    assert_eq!(verdict.score_difference, 15.0);
    assert!(verdict.comment.contains("Moderate"));
}

#[test]
fn large_gaps_demand_manual_review() {
    let verdict = ResultComparator::default().compare(70.0, assessment(86.0, 0.8));

    assert!(!verdict.agreement);
    assert_eq!(verdict.score_difference, 16.0);
    assert!(verdict.recommendation.contains("manual review required"));
    assert!(verdict.comment.contains("Significant"));
}

#[test]
fn low_confidence_favors_the_formula_score() {
    let verdict = ResultComparator::default().compare(90.0, assessment(75.0, 0.3));

    assert!(!verdict.agreement);
    assert_eq!(verdict.score_difference, 15.0);
    assert_eq!(verdict.rag_confidence, 0.3);
    assert!(verdict.recommendation.contains("Formula score 90.0"));
    assert!(verdict.comment.contains("more reliable"));
}

#[test]
fn low_confidence_overrides_matching_scores() {
    let verdict = ResultComparator::default().compare(80.0, assessment(80.0, 0.2));

    assert!(!verdict.agreement);
    assert_eq!(verdict.score_difference, 0.0);
    assert!(verdict.recommendation.contains("Formula score 80.0"));
}

#[test]
fn boundary_confidence_is_not_low() {
    let verdict = ResultComparator::default().compare(80.0, assessment(80.0, 0.5));

    assert!(verdict.agreement);
}

#[test]
fn difference_magnitude_is_symmetric() {
    let comparator = ResultComparator::default();
    let forward = comparator.compare(62.0, assessment(81.0, 0.9));
    let reverse = comparator.compare(81.0, assessment(62.0, 0.9));

    assert_eq!(forward.score_difference, reverse.score_difference);
    assert_eq!(forward.agreement, reverse.agreement);
}

#[test]
fn reported_difference_is_rounded_to_one_decimal() {
    let verdict = ResultComparator::default().compare(70.0, assessment(77.25, 0.9));

    assert_eq!(verdict.score_difference, 7.3);
    assert!(!verdict.agreement);
}

#[test]
fn degenerate_thresholds_fall_back_to_defaults() {
    let comparator = ResultComparator::new(f64::NAN, -2.0);
    assert_eq!(comparator.agreement_threshold(), 5.0);
    assert_eq!(comparator.low_confidence_threshold(), 0.5);

    let comparator = ResultComparator::new(-1.0, 7.0);
    assert_eq!(comparator.agreement_threshold(), 5.0);
    assert_eq!(comparator.low_confidence_threshold(), 0.5);

    let comparator = ResultComparator::new(0.0, f64::INFINITY);
    assert_eq!(comparator.agreement_threshold(), 5.0);
    assert_eq!(comparator.low_confidence_threshold(), 0.5);
}

#[test]
fn custom_thresholds_are_respected() {
    let comparator = ResultComparator::new(10.0, 0.7);

    let agreeing = comparator.compare(70.0, assessment(78.0, 0.75));
    assert!(agreeing.agreement);

    let distrustful = comparator.compare(70.0, assessment(78.0, 0.65));
    assert!(!distrustful.agreement);
    assert!(distrustful.recommendation.contains("Formula score 70.0"));
}
