//! Ledger state changes caused by a transaction.

use serde::Deserialize;
use serde_json::Value;

use super::lenient;

/// Before/after value pair for one address touched by a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct StateChange {
    #[serde(deserialize_with = "lenient::string")]
    pub address: String,
    #[serde(deserialize_with = "lenient::string")]
    pub before: String,
    #[serde(deserialize_with = "lenient::string")]
    pub after: String,
    #[serde(deserialize_with = "lenient::string")]
    pub difference: String,
}

/// Parse a state-change list.
///
/// A body that is not a JSON array yields an empty list. Entries that are
/// not objects are skipped.
#[must_use]
pub fn parse_state_changes(json: &Value) -> Vec<StateChange> {
    let Some(entries) = json.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|entry| entry.is_object())
        .filter_map(|entry| StateChange::deserialize(entry).ok())
        .collect()
}
