use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use super::comparison::ResultComparator;
use super::domain::{
    CitizenRecord, ContextualAssessment, DualAnalysisVerdict, FormulaAnalysis, ScoringResult,
};
use super::scoring::BurdenScoringEngine;
use super::validation::RecordValidator;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::workflows::hies::ReferenceDataStore;

/// Facade wiring the validator, scoring engine, and comparator together.
/// Timestamps are stamped only here so the engine itself stays replayable.
pub struct EligibilityAssessmentService {
    store: Arc<ReferenceDataStore>,
    validator: RecordValidator,
    engine: BurdenScoringEngine,
    comparator: ResultComparator,
}

impl EligibilityAssessmentService {
    /// Build from configuration. A missing or malformed survey extract is
    /// logged and the service degrades to the built-in national tables.
    pub fn from_config(config: &AppConfig) -> Self {
        let store = match &config.reference.survey_path {
            Some(path) => match ReferenceDataStore::from_path(path) {
                Ok(store) => store,
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to load HIES extract, continuing on national tables"
                    );
                    ReferenceDataStore::builtin()
                }
            },
            None => ReferenceDataStore::builtin(),
        };

        Self::with_store(Arc::new(store), comparator_from(config))
    }

    /// Strict variant surfacing reference-load failures instead of degrading.
    pub fn try_from_config(config: &AppConfig) -> Result<Self, AppError> {
        let store = match &config.reference.survey_path {
            Some(path) => ReferenceDataStore::from_path(path)?,
            None => ReferenceDataStore::builtin(),
        };

        Ok(Self::with_store(Arc::new(store), comparator_from(config)))
    }

    pub fn with_store(store: Arc<ReferenceDataStore>, comparator: ResultComparator) -> Self {
        let validator = RecordValidator::new(store.clone());
        let engine = BurdenScoringEngine::new(store.clone());

        Self {
            store,
            validator,
            engine,
            comparator,
        }
    }

    pub fn store(&self) -> &Arc<ReferenceDataStore> {
        &self.store
    }

    pub fn comparator(&self) -> &ResultComparator {
        &self.comparator
    }

    /// Validate and score a raw submission.
    pub fn score(&self, record: &CitizenRecord) -> ScoringResult {
        let enriched = self.validator.enrich(record);
        self.engine.score(&enriched)
    }

    /// Deterministic analysis: the score plus its class label and a
    /// reproducible explanation of the composite.
    pub fn formula_analysis(&self, record: &CitizenRecord) -> FormulaAnalysis {
        let enriched = self.validator.enrich(record);
        let result = self.engine.score(&enriched);

        let eligibility_class = match enriched.sub_bracket {
            Some(_) => enriched.macro_tier.label().to_string(),
            None => "Unknown".to_string(),
        };
        let explanation = explain(&result);

        debug!(
            score = result.final_score,
            class = %eligibility_class,
            "formula analysis complete"
        );

        FormulaAnalysis {
            score: result.final_score,
            eligibility_class,
            explanation,
            confidence: 1.0,
            result,
        }
    }

    /// Run the formula analysis and reconcile it against an externally
    /// produced contextual assessment.
    pub fn dual_analysis(
        &self,
        record: &CitizenRecord,
        contextual: ContextualAssessment,
    ) -> DualAnalysisVerdict {
        let formula = self.formula_analysis(record);
        let comparison = self.comparator.compare(formula.score, contextual);

        DualAnalysisVerdict {
            formula,
            contextual,
            comparison,
            generated_at: Utc::now(),
        }
    }
}

fn comparator_from(config: &AppConfig) -> ResultComparator {
    ResultComparator::new(
        config.comparator.agreement_threshold,
        config.comparator.low_confidence_threshold,
    )
}

fn explain(result: &ScoringResult) -> String {
    if result.disability_auto_qualified {
        return format!(
            "Final score {:.2}: registered disability qualifies the household automatically.",
            result.final_score
        );
    }

    let mut explanation = format!(
        "Final score {:.2} = min(100, base {:.0} + (burden {:.0} x 75% + documentation {:.0} x 25%)); \
burden ratio {:.2} against state median burden {:.6}; adult equivalent {:.2} on income RM {:.2}.",
        result.final_score,
        result.breakdown.base_score,
        result.breakdown.raw_burden_score,
        result.breakdown.documentation_score,
        result.burden_ratio,
        result.state_median_burden,
        result.adult_equivalent,
        result.equivalent_income,
    );

    if !result.missing_fields.is_empty() {
        explanation.push_str(&format!(
            " Defaults substituted for: {}.",
            result.missing_fields.join(", ")
        ));
    }

    explanation
}
