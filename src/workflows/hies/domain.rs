use serde::{Deserialize, Serialize};

/// DOSM income-distribution sub-brackets carried by the HIES extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubBracket {
    B1,
    B2,
    B3,
    B4,
    M1,
    M2,
    M3,
    M4,
    T1,
    T2,
}

impl SubBracket {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "B1" => Some(Self::B1),
            "B2" => Some(Self::B2),
            "B3" => Some(Self::B3),
            "B4" => Some(Self::B4),
            "M1" => Some(Self::M1),
            "M2" => Some(Self::M2),
            "M3" => Some(Self::M3),
            "M4" => Some(Self::M4),
            "T1" => Some(Self::T1),
            "T2" => Some(Self::T2),
            _ => None,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            SubBracket::B1 => "B1",
            SubBracket::B2 => "B2",
            SubBracket::B3 => "B3",
            SubBracket::B4 => "B4",
            SubBracket::M1 => "M1",
            SubBracket::M2 => "M2",
            SubBracket::M3 => "M3",
            SubBracket::M4 => "M4",
            SubBracket::T1 => "T1",
            SubBracket::T2 => "T2",
        }
    }
}

/// Where a resolved representative income came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeProvenance {
    StateSurvey,
    NationalBracket,
    NationalMedian,
}

impl IncomeProvenance {
    pub const fn label(self) -> &'static str {
        match self {
            IncomeProvenance::StateSurvey => "state_survey",
            IncomeProvenance::NationalBracket => "national_bracket",
            IncomeProvenance::NationalMedian => "national_median",
        }
    }
}

/// Snapshot of how reference lookups resolved since the store was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLookupStats {
    pub survey_hits: u64,
    pub bracket_fallbacks: u64,
    pub income_fallbacks: u64,
    pub median_fallbacks: u64,
}
