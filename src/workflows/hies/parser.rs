use super::domain::SubBracket;
use super::normalizer::lookup_key;
use super::ReferenceLoadError;
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct SurveyRecord {
    pub(crate) state_key: String,
    pub(crate) bracket: SubBracket,
    pub(crate) income: Option<f64>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<SurveyRecord>, ReferenceLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<SurveyRow>().enumerate() {
        let row = record?;
        // Header occupies line one.
        let line = index + 2;

        let bracket =
            SubBracket::parse(&row.income_group).ok_or_else(|| ReferenceLoadError::UnknownBracket {
                row: line,
                value: row.income_group.clone(),
            })?;

        let income = match row.income.as_deref() {
            Some(raw) => Some(parse_income(raw, line)?),
            None => None,
        };

        records.push(SurveyRecord {
            state_key: lookup_key(&row.state),
            bracket,
            income,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct SurveyRow {
    state: String,
    income_group: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    income: Option<String>,
}

fn parse_income(raw: &str, line: usize) -> Result<f64, ReferenceLoadError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ReferenceLoadError::InvalidIncome {
            row: line,
            value: raw.to_string(),
        })?;

    if !value.is_finite() {
        return Err(ReferenceLoadError::InvalidIncome {
            row: line,
            value: raw.to_string(),
        });
    }

    Ok(value)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
