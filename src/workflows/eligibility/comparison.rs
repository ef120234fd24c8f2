use super::domain::{ComparisonResult, ContextualAssessment};

const DEFAULT_AGREEMENT_THRESHOLD: f64 = 5.0;
const DEFAULT_LOW_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Gap beyond which disagreement always escalates to manual review.
const MANUAL_REVIEW_DELTA: f64 = 15.0;

/// Reconciles the deterministic score with the contextual assessment.
///
/// A contextual confidence below the low-confidence threshold disqualifies
/// the comparison outright: agreement is reported false even when the raw
/// scores happen to match, and the recommendation falls back to the
/// transparent formula result.
#[derive(Debug, Clone)]
pub struct ResultComparator {
    agreement_threshold: f64,
    low_confidence_threshold: f64,
}

impl ResultComparator {
    /// Non-finite or out-of-range thresholds are replaced by the defaults.
    pub fn new(agreement_threshold: f64, low_confidence_threshold: f64) -> Self {
        let agreement_threshold = if agreement_threshold.is_finite() && agreement_threshold > 0.0 {
            agreement_threshold
        } else {
            DEFAULT_AGREEMENT_THRESHOLD
        };

        let low_confidence_threshold = if low_confidence_threshold.is_finite()
            && (0.0..=1.0).contains(&low_confidence_threshold)
        {
            low_confidence_threshold
        } else {
            DEFAULT_LOW_CONFIDENCE_THRESHOLD
        };

        Self {
            agreement_threshold,
            low_confidence_threshold,
        }
    }

    pub fn agreement_threshold(&self) -> f64 {
        self.agreement_threshold
    }

    pub fn low_confidence_threshold(&self) -> f64 {
        self.low_confidence_threshold
    }

    pub fn compare(&self, formula_score: f64, contextual: ContextualAssessment) -> ComparisonResult {
        let ContextualAssessment {
            score: contextual_score,
            confidence,
        } = contextual;

        // Decisions use the exact gap; only the reported figure is rounded.
        let difference = (contextual_score - formula_score).abs();
        let score_difference = round1(difference);

        if confidence < self.low_confidence_threshold {
            return ComparisonResult {
                agreement: false,
                score_difference,
                rag_confidence: confidence,
                recommendation: format!(
                    "Formula score {formula_score:.1} (low contextual confidence {confidence:.2}, favor the transparent method)"
                ),
                comment: format!(
                    "Low contextual confidence ({confidence:.2}) suggests the formula approach is more reliable for this case."
                ),
            };
        }

        if difference <= self.agreement_threshold {
            let consensus = (formula_score + contextual_score) / 2.0;
            return ComparisonResult {
                agreement: true,
                score_difference,
                rag_confidence: confidence,
                recommendation: format!(
                    "Consensus: {consensus:.1} (both methods agree within {} points)",
                    self.agreement_threshold
                ),
                comment: format!(
                    "Both analysis methods agree within the {}-point threshold, providing a robust score determination.",
                    self.agreement_threshold
                ),
            };
        }

        let (recommendation, comment) = if difference > MANUAL_REVIEW_DELTA {
            (
                format!(
                    "Disagreement: contextual {contextual_score:.1} vs formula {formula_score:.1} ({score_difference:.1} points apart), manual review required"
                ),
                format!(
                    "Significant score disagreement ({score_difference:.1} points) indicates the case may require manual review."
                ),
            )
        } else {
            (
                format!(
                    "Disagreement: contextual {contextual_score:.1} vs formula {formula_score:.1} ({score_difference:.1} points apart)"
                ),
                format!(
                    "Moderate score disagreement ({score_difference:.1} points); consider both perspectives in the final decision."
                ),
            )
        };

        ComparisonResult {
            agreement: false,
            score_difference,
            rag_confidence: confidence,
            recommendation,
            comment,
        }
    }
}

impl Default for ResultComparator {
    fn default() -> Self {
        Self::new(DEFAULT_AGREEMENT_THRESHOLD, DEFAULT_LOW_CONFIDENCE_THRESHOLD)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
