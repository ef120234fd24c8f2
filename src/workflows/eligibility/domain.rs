use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::workflows::hies::{IncomeProvenance, SubBracket};

/// Raw intake payload. Every field is optional so incomplete submissions can
/// still be enriched and scored on fallbacks; only wrong types are rejected,
/// at the deserialization boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitizenRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizen_id: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub income_bracket: Option<String>,
    #[serde(default)]
    pub household_size: Option<u32>,
    #[serde(default)]
    pub number_of_children: Option<u32>,
    #[serde(default)]
    pub disability_status: Option<bool>,
    #[serde(default)]
    pub is_signature_valid: Option<bool>,
    #[serde(default)]
    pub is_data_authentic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residency_duration_months: Option<u32>,
}

impl CitizenRecord {
    /// Parse a JSON submission. Wrong field types are rejected here; missing
    /// fields pass through and are handled during enrichment.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}

/// Macro income tier used by subsidy policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacroTier {
    B40,
    #[serde(rename = "M40-M1")]
    M40Lower,
    #[serde(rename = "M40-M2")]
    M40Upper,
    T20,
}

impl MacroTier {
    pub const fn label(self) -> &'static str {
        match self {
            MacroTier::B40 => "B40",
            MacroTier::M40Lower => "M40-M1",
            MacroTier::M40Upper => "M40-M2",
            MacroTier::T20 => "T20",
        }
    }
}

impl From<SubBracket> for MacroTier {
    fn from(bracket: SubBracket) -> Self {
        match bracket {
            SubBracket::B1 | SubBracket::B2 | SubBracket::B3 | SubBracket::B4 => MacroTier::B40,
            SubBracket::M1 | SubBracket::M2 => MacroTier::M40Lower,
            SubBracket::M3 | SubBracket::M4 => MacroTier::M40Upper,
            SubBracket::T1 | SubBracket::T2 => MacroTier::T20,
        }
    }
}

/// Validation output: the record in canonical vocabulary with its
/// representative income resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub citizen_id: Option<String>,
    pub state: Option<String>,
    pub sub_bracket: Option<SubBracket>,
    pub macro_tier: MacroTier,
    pub household_size: u32,
    pub number_of_children: u32,
    pub disability_status: bool,
    pub signature_valid: Option<bool>,
    pub data_authentic: Option<bool>,
    pub equivalent_income: f64,
    pub income_provenance: IncomeProvenance,
    pub missing_fields: Vec<String>,
    pub low_confidence: bool,
}

/// Component trail behind a final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base_score: f64,
    pub raw_burden_score: f64,
    pub documentation_score: f64,
    pub component_total: f64,
}

/// Output of the deterministic scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub final_score: f64,
    pub breakdown: ScoreBreakdown,
    pub equivalent_income: f64,
    pub adult_equivalent: f64,
    pub burden_ratio: f64,
    pub state_median_burden: f64,
    pub disability_auto_qualified: bool,
    pub missing_fields: Vec<String>,
}

/// Score and self-reported confidence supplied by the contextual pipeline.
/// Its provenance is opaque to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContextualAssessment {
    pub score: f64,
    pub confidence: f64,
}

/// Verdict reconciling the deterministic and contextual scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub agreement: bool,
    pub score_difference: f64,
    pub rag_confidence: f64,
    pub recommendation: String,
    pub comment: String,
}

/// Deterministic analysis wrapper pairing the score with its class label
/// and a reproducible explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaAnalysis {
    pub score: f64,
    pub eligibility_class: String,
    pub explanation: String,
    pub confidence: f64,
    pub result: ScoringResult,
}

/// Combined output of both analysis methods plus the comparator verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualAnalysisVerdict {
    pub formula: FormulaAnalysis,
    pub contextual: ContextualAssessment,
    pub comparison: ComparisonResult,
    pub generated_at: DateTime<Utc>,
}
