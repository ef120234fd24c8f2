//! Subsidy eligibility workflow: intake validation, deterministic burden
//! scoring, and dual-method reconciliation.

pub mod analysis;
pub mod comparison;
pub mod domain;
pub(crate) mod scoring;
pub mod validation;

#[cfg(test)]
mod tests;

pub use analysis::EligibilityAssessmentService;
pub use comparison::ResultComparator;
pub use domain::{
    CitizenRecord, ComparisonResult, ContextualAssessment, DualAnalysisVerdict, EnrichedRecord,
    FormulaAnalysis, IncomeProvenance, MacroTier, ScoreBreakdown, ScoringResult, SubBracket,
};
pub use scoring::BurdenScoringEngine;
pub use validation::RecordValidator;
