//! Address history entries.

use serde::Deserialize;
use serde_json::Value;

use super::lenient;

/// One row of an address's transaction history.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HistoryTransaction {
    #[serde(deserialize_with = "lenient::string")]
    pub from: String,
    #[serde(deserialize_with = "lenient::string")]
    pub to: String,
    #[serde(deserialize_with = "lenient::f64")]
    pub amount: f64,
    /// Unix seconds.
    #[serde(deserialize_with = "lenient::i64")]
    pub timestamp: i64,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub hash: Option<String>,
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub block: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub fee: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub method: Option<String>,
}

/// Parse the `transactions` array out of a history response.
///
/// A missing array yields an empty list; malformed rows are skipped so one
/// bad entry does not hide the rest of the history.
#[must_use]
pub fn parse_history(json: &Value) -> Vec<HistoryTransaction> {
    let Some(rows) = json.get("transactions").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut transactions = Vec::with_capacity(rows.len());
    for row in rows {
        if !row.is_object() {
            continue;
        }
        match HistoryTransaction::deserialize(row) {
            Ok(txn) => transactions.push(txn),
            Err(e) => tracing::debug!("Skipping malformed history row: {e}"),
        }
    }
    transactions
}
