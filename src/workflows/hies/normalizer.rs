use super::national::STATE_MEDIAN_INCOME;
use std::collections::HashMap;
use std::sync::OnceLock;

static STATE_NAME_MAP: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

// Federal territories appear without the "W.P." prefix in citizen submissions.
const STATE_ALIASES: &[(&str, &str)] = &[
    ("Kuala Lumpur", "W.P. Kuala Lumpur"),
    ("Labuan", "W.P. Labuan"),
    ("Putrajaya", "W.P. Putrajaya"),
];

pub(crate) fn normalize_key(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

/// Canonical DOSM spelling for a state or federal territory, when recognized.
pub(crate) fn canonical_state(value: &str) -> Option<&'static str> {
    state_name_map().get(&normalize_key(value)).copied()
}

/// Index key for reference-table lookups. Unrecognized names keep their
/// normalized form so repeated submissions still hit the same entries.
pub(crate) fn lookup_key(value: &str) -> String {
    match canonical_state(value) {
        Some(canonical) => normalize_key(canonical),
        None => normalize_key(value),
    }
}

fn state_name_map() -> &'static HashMap<String, &'static str> {
    STATE_NAME_MAP.get_or_init(|| {
        let mut map = HashMap::with_capacity(STATE_MEDIAN_INCOME.len() + STATE_ALIASES.len());
        for (state, _) in STATE_MEDIAN_INCOME {
            map.insert(normalize_key(state), *state);
        }
        for (alias, canonical) in STATE_ALIASES {
            map.insert(normalize_key(alias), *canonical);
        }
        map
    })
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(value: &str) -> String {
    normalize_key(value)
}
