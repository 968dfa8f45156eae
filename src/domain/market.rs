//! Market snapshot shown beside a transaction.

use serde_json::Value;

use super::lenient::f64_or_zero;

/// Latest ETH price, 24h change and network gas price.
///
/// Each field is parsed independently; anything missing or non-numeric
/// becomes `0.0` instead of failing the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EthereumData {
    /// Price in USD.
    pub price: f64,
    /// Percent change over the last 24h.
    pub change: f64,
    /// Current gas price in Gwei.
    pub gas_price: f64,
}

impl EthereumData {
    /// Parse the `{jcoPrice, jcoChange, gasPrice}` payload.
    #[must_use]
    pub fn from_json(json: &Value) -> Self {
        Self {
            price: f64_or_zero(json.get("jcoPrice")),
            change: f64_or_zero(json.get("jcoChange")),
            gas_price: f64_or_zero(json.get("gasPrice")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_numbers_and_numeric_strings() {
        let data = EthereumData::from_json(&json!({
            "jcoPrice": "3150.42",
            "jcoChange": -1.25,
            "gasPrice": 18
        }));
        assert_eq!(
            data,
            EthereumData {
                price: 3150.42,
                change: -1.25,
                gas_price: 18.0
            }
        );
    }

    #[test]
    fn test_malformed_fields_default_to_zero() {
        let data = EthereumData::from_json(&json!({
            "jcoPrice": "n/a",
            "gasPrice": {"fast": 20}
        }));
        assert_eq!(data, EthereumData::default());

        let data = EthereumData::from_json(&json!({"jcoPrice": 10, "jcoChange": "oops"}));
        assert_eq!(data.price, 10.0);
        assert_eq!(data.change, 0.0);
        assert_eq!(data.gas_price, 0.0);
    }

    #[test]
    fn test_non_object_body_is_all_zero() {
        assert_eq!(EthereumData::from_json(&json!("down")), EthereumData::default());
    }
}
