//! Reference data for burden scoring: the HIES state-by-bracket survey
//! extract plus built-in national fallback tables.

mod domain;
mod national;
mod normalizer;
mod parser;

pub use domain::{IncomeProvenance, ReferenceLookupStats, SubBracket};

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ReferenceLoadError {
    #[error("failed to read HIES extract: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid HIES CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("HIES row {row}: unrecognized income group '{value}'")]
    UnknownBracket { row: usize, value: String },
    #[error("HIES row {row}: invalid income '{value}'")]
    InvalidIncome { row: usize, value: String },
}

#[derive(Debug, Default)]
struct LookupCounters {
    survey_hits: AtomicU64,
    bracket_fallbacks: AtomicU64,
    income_fallbacks: AtomicU64,
    median_fallbacks: AtomicU64,
}

/// Immutable income reference tables. Safe to share across threads; the
/// lookup counters are observability only and never influence results.
#[derive(Debug)]
pub struct ReferenceDataStore {
    survey_income: HashMap<(String, SubBracket), f64>,
    counters: LookupCounters,
}

impl ReferenceDataStore {
    /// Store backed only by the built-in national tables.
    pub fn builtin() -> Self {
        Self {
            survey_income: HashMap::new(),
            counters: LookupCounters::default(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReferenceLoadError> {
        let records = parser::parse_records(reader)?;
        let mut survey_income = HashMap::with_capacity(records.len());
        let mut sparse = 0usize;

        for record in records {
            match record.income {
                Some(income) => {
                    survey_income.insert((record.state_key, record.bracket), income);
                }
                None => sparse += 1,
            }
        }

        info!(
            entries = survey_income.len(),
            sparse, "loaded HIES survey extract"
        );

        Ok(Self {
            survey_income,
            counters: LookupCounters::default(),
        })
    }

    /// Representative monthly income for a state and sub-bracket, with the
    /// fallback chain survey row, national bracket, national median.
    pub fn equivalent_income(
        &self,
        state: Option<&str>,
        bracket: Option<SubBracket>,
    ) -> (f64, IncomeProvenance) {
        if let (Some(state), Some(bracket)) = (state, bracket) {
            let key = (normalizer::lookup_key(state), bracket);
            if let Some(income) = self.survey_income.get(&key) {
                self.counters.survey_hits.fetch_add(1, Ordering::Relaxed);
                return (*income, IncomeProvenance::StateSurvey);
            }
        }

        if let Some(bracket) = bracket {
            self.counters
                .bracket_fallbacks
                .fetch_add(1, Ordering::Relaxed);
            debug!(
                bracket = bracket.code(),
                "no survey row for state, using national bracket income"
            );
            return (
                national::bracket_income(bracket),
                IncomeProvenance::NationalBracket,
            );
        }

        self.counters
            .income_fallbacks
            .fetch_add(1, Ordering::Relaxed);
        warn!("record carries no usable income bracket, using national fallback income");
        (national::FALLBACK_INCOME, IncomeProvenance::NationalMedian)
    }

    /// Median burden for the household's state, or the national median when
    /// the state is missing or unrecognized.
    pub fn median_burden(&self, state: Option<&str>) -> f64 {
        if let Some(state) = state {
            if let Some(burden) = national::state_median_burden(&normalizer::lookup_key(state)) {
                return burden;
            }
        }

        self.counters
            .median_fallbacks
            .fetch_add(1, Ordering::Relaxed);
        warn!(
            state = state.unwrap_or("<missing>"),
            "no median burden for state, using national median"
        );
        national::national_median_burden()
    }

    /// Canonical DOSM spelling for a state or federal territory.
    pub fn canonical_state(&self, value: &str) -> Option<&'static str> {
        normalizer::canonical_state(value)
    }

    pub fn survey_entries(&self) -> usize {
        self.survey_income.len()
    }

    pub fn lookup_stats(&self) -> ReferenceLookupStats {
        ReferenceLookupStats {
            survey_hits: self.counters.survey_hits.load(Ordering::Relaxed),
            bracket_fallbacks: self.counters.bracket_fallbacks.load(Ordering::Relaxed),
            income_fallbacks: self.counters.income_fallbacks.load(Ordering::Relaxed),
            median_fallbacks: self.counters.median_fallbacks.load(Ordering::Relaxed),
        }
    }
}
