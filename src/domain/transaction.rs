//! Transaction detail types.
//!
//! A [`TransactionDetail`] is the record served by the detail endpoint. Its
//! optional [`GasMetrics`] block feeds the gas risk classification.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;
use super::lenient;
use crate::constants::{HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD};

// ============================================================================
// Helper Functions
// ============================================================================

/// Format a transaction timestamp for display.
///
/// Accepts unix seconds or an RFC 3339 string. Anything else is shown as-is.
///
/// # Returns
///
/// A formatted date string, or "Timestamp not available" if the timestamp is empty.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw == "0" {
        return "Timestamp not available".to_string();
    }

    let parsed = match raw.parse::<i64>() {
        Ok(secs) => chrono::DateTime::from_timestamp(secs, 0),
        Err(_) => chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&chrono::Utc)),
    };

    match parsed {
        Some(datetime) => datetime.format("%a, %d %b %Y %H:%M:%S UTC").to_string(),
        None => raw.to_string(),
    }
}

// ============================================================================
// Risk Level
// ============================================================================

/// Gas risk classification derived from a transaction's risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a string-encoded risk score.
    ///
    /// Scores at or above 80 are high, at or above 50 medium. Anything that
    /// does not parse as a number compares false against both thresholds and
    /// lands on `Low`.
    #[must_use]
    pub fn from_score(score: &str) -> Self {
        let value = score.trim().parse::<f64>().unwrap_or(f64::NAN);
        if value >= HIGH_RISK_THRESHOLD {
            Self::High
        } else if value >= MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Gas Metrics
// ============================================================================

/// Fee and consumption figures attached to a transaction.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GasMetrics {
    #[serde(deserialize_with = "lenient::u64")]
    pub gas_used: u64,
    #[serde(deserialize_with = "lenient::u64")]
    pub gas_limit: u64,
    #[serde(deserialize_with = "lenient::string")]
    pub gas_price: String,
    #[serde(deserialize_with = "lenient::f64")]
    pub avg_gas_price: f64,
    #[serde(deserialize_with = "lenient::string")]
    pub gas_efficiency: String,
    #[serde(deserialize_with = "lenient::string")]
    pub price_difference: String,
    #[serde(deserialize_with = "lenient::string")]
    pub risk_score: String,
}

impl GasMetrics {
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(&self.risk_score)
    }

    /// Share of the gas limit actually consumed, in percent.
    ///
    /// Returns `None` when the limit is zero.
    #[must_use]
    pub fn usage_percent(&self) -> Option<f64> {
        (self.gas_limit > 0).then(|| self.gas_used as f64 / self.gas_limit as f64 * 100.0)
    }
}

// ============================================================================
// Transaction Detail
// ============================================================================

/// Full transaction record as served by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionDetail {
    #[serde(deserialize_with = "lenient::string")]
    pub hash: String,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(deserialize_with = "lenient::u64")]
    pub block_number: u64,
    #[serde(deserialize_with = "lenient::string")]
    pub timestamp: String,
    #[serde(deserialize_with = "lenient::string")]
    pub from: String,
    #[serde(deserialize_with = "lenient::string")]
    pub to: String,
    /// Display-formatted value, e.g. "1.25 ETH".
    #[serde(deserialize_with = "lenient::string")]
    pub value: String,
    /// Display-formatted fee.
    #[serde(deserialize_with = "lenient::string")]
    pub fee: String,
    pub gas_metrics: Option<GasMetrics>,
}

impl TransactionDetail {
    /// Build a transaction from a response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyPayload`] when the body is blank, `null` or an
    /// empty object, and [`ApiError::Parse`] when it is not a JSON object.
    pub fn from_json(json: &Value) -> Result<Self, ApiError> {
        match json {
            Value::Null => Err(ApiError::EmptyPayload),
            Value::Object(map) if map.is_empty() => Err(ApiError::EmptyPayload),
            Value::Object(_) => serde_json::from_value(json.clone())
                .map_err(|e| ApiError::parse(format!("Invalid transaction record: {e}"))),
            _ => Err(ApiError::parse("Transaction record is not an object")),
        }
    }

    /// Risk level of this transaction; `Low` when no gas metrics were sent.
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        self.gas_metrics
            .as_ref()
            .map_or(RiskLevel::Low, GasMetrics::risk_level)
    }

    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

// ============================================================================
// Tests
// ============================================================================
