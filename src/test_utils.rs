//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting fixture setup across tests.
#![allow(dead_code)]

use serde_json::{Value, json};

use crate::domain::{
    ApiError, EthereumData, GasMetrics, HistoryTransaction, StateChange, TransactionDetail,
};
use crate::state::{
    DetailEffect, DetailEvent, DetailState, DetailTab, HistoryEffect, HistoryEvent, HistoryState,
};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TransactionMother;

impl TransactionMother {
    #[must_use]
    pub fn with_hash(hash: &str) -> TransactionDetail {
        TransactionDetail {
            hash: hash.to_string(),
            status: "Success".to_string(),
            block_number: 19_000_000,
            timestamp: "1700000000".to_string(),
            from: "0x1111111111111111111111111111111111111111".to_string(),
            to: "0x2222222222222222222222222222222222222222".to_string(),
            value: "1.25 ETH".to_string(),
            fee: "0.00068 ETH".to_string(),
            gas_metrics: Some(GasMetricsMother::medium_risk()),
        }
    }

    #[must_use]
    pub fn without_gas(hash: &str) -> TransactionDetail {
        TransactionDetail {
            gas_metrics: None,
            ..Self::with_hash(hash)
        }
    }

    #[must_use]
    pub fn with_risk_score(hash: &str, risk_score: &str) -> TransactionDetail {
        TransactionDetail {
            gas_metrics: Some(GasMetrics {
                risk_score: risk_score.to_string(),
                ..GasMetricsMother::medium_risk()
            }),
            ..Self::with_hash(hash)
        }
    }
}

pub struct GasMetricsMother;

impl GasMetricsMother {
    #[must_use]
    pub fn medium_risk() -> GasMetrics {
        GasMetrics {
            gas_used: 21_000,
            gas_limit: 30_000,
            gas_price: "32.5 Gwei".to_string(),
            avg_gas_price: 28.0,
            gas_efficiency: "70%".to_string(),
            price_difference: "+16.07%".to_string(),
            risk_score: "65".to_string(),
        }
    }
}

pub struct HistoryMother;

impl HistoryMother {
    /// `count` rows with hashes `0x0`, `0x1`, ... in order.
    #[must_use]
    pub fn rows(count: usize) -> Vec<HistoryTransaction> {
        (0..count).map(Self::row).collect()
    }

    #[must_use]
    pub fn row(index: usize) -> HistoryTransaction {
        HistoryTransaction {
            from: "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1234".to_string(),
            to: "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb5678".to_string(),
            amount: 0.5 + index as f64,
            timestamp: 1_700_000_000 - index as i64 * 60,
            hash: Some(format!("0x{index}")),
            block: Some(19_000_000 - index as u64),
            fee: Some("0.0004".to_string()),
            method: Some("transfer".to_string()),
        }
    }
}

pub struct PageMother;

impl PageMother {
    /// History page for `0xowner` with `count` loaded rows.
    #[must_use]
    pub fn history(count: usize) -> HistoryState {
        let mut state = HistoryState::default();
        let effects = state.apply(HistoryEvent::AddressChanged("0xowner".into()));
        let Some(HistoryEffect::Fetch { token, .. }) = effects.first() else {
            panic!("expected history fetch, got {effects:?}");
        };
        state.apply(HistoryEvent::Loaded {
            token: *token,
            result: Ok(HistoryMother::rows(count)),
        });
        state
    }

    /// Detail page waiting on its transaction.
    #[must_use]
    pub fn detail_loading(hash: &str) -> (DetailState, Vec<DetailEffect>) {
        let mut state = DetailState::new();
        let effects = state.apply(DetailEvent::IdentifierChanged(Some(hash.into())));
        (state, effects)
    }

    /// Detail page whose transaction fetch finished with `result`.
    #[must_use]
    pub fn detail_with(hash: &str, result: Result<TransactionDetail, ApiError>) -> DetailState {
        let (mut state, effects) = Self::detail_loading(hash);
        let Some(DetailEffect::FetchTransaction { token, .. }) = effects.first() else {
            panic!("expected transaction fetch, got {effects:?}");
        };
        state.apply(DetailEvent::TransactionLoaded {
            token: *token,
            result,
        });
        state
    }

    #[must_use]
    pub fn detail_loaded(hash: &str) -> DetailState {
        Self::detail_with(hash, Ok(TransactionMother::with_hash(hash)))
    }

    /// Loaded detail page on the State tab with `changes` applied.
    #[must_use]
    pub fn detail_on_state_tab(hash: &str, changes: Vec<StateChange>) -> DetailState {
        let mut state = Self::detail_loaded(hash);
        let effects = state.apply(DetailEvent::TabSelected(DetailTab::State));
        let Some(DetailEffect::FetchStateChanges { token, .. }) = effects.first() else {
            panic!("expected state change fetch, got {effects:?}");
        };
        state.apply(DetailEvent::StateChangesLoaded {
            token: *token,
            result: Ok(changes),
        });
        state
    }

    /// Apply a market snapshot carrying the page's own poller token.
    pub fn with_market(state: &mut DetailState, snapshot: EthereumData) {
        let token = state.market().token();
        state.apply(DetailEvent::MarketUpdated {
            token,
            result: Ok(snapshot),
        });
    }
}

// ============================================================================
// JSON Fixtures
// ============================================================================

pub struct JsonMother;

impl JsonMother {
    pub const TX_HASH: &'static str =
        "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";

    #[must_use]
    pub fn transaction() -> Value {
        json!({
            "hash": Self::TX_HASH,
            "status": "Success",
            "blockNumber": 19_000_000,
            "timestamp": "1700000000",
            "from": "0x1111111111111111111111111111111111111111",
            "to": "0x2222222222222222222222222222222222222222",
            "value": "1.25 ETH",
            "fee": "0.00068 ETH",
            "gasMetrics": {
                "gasUsed": 21_000,
                "gasLimit": 30_000,
                "gasPrice": "32.5 Gwei",
                "avgGasPrice": 28,
                "gasEfficiency": "70%",
                "priceDifference": "+16.07%",
                "riskScore": "65"
            }
        })
    }

    #[must_use]
    pub fn transaction_without_gas() -> Value {
        let mut value = Self::transaction();
        if let Some(map) = value.as_object_mut() {
            map.remove("gasMetrics");
        }
        value
    }

    #[must_use]
    pub fn market() -> Value {
        json!({"jcoPrice": 3456.78, "jcoChange": -1.25, "gasPrice": 21.5})
    }

    #[must_use]
    pub fn state_changes() -> Value {
        json!([
            {
                "address": "0x1111111111111111111111111111111111111111",
                "before": "10.0 ETH",
                "after": "8.75 ETH",
                "difference": "-1.25 ETH"
            },
            {
                "address": "0x2222222222222222222222222222222222222222",
                "before": "0.5 ETH",
                "after": "1.75 ETH",
                "difference": "+1.25 ETH"
            }
        ])
    }

    /// History response with `count` rows, hashes `0x0`, `0x1`, ...
    #[must_use]
    pub fn history(count: usize) -> Value {
        let rows: Vec<Value> = (0..count)
            .map(|i| {
                json!({
                    "from": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1234",
                    "to": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb5678",
                    "amount": 0.5 + i as f64,
                    "timestamp": 1_700_000_000 - i as i64 * 60,
                    "hash": format!("0x{i}"),
                    "block": 19_000_000 - i as u64,
                })
            })
            .collect();
        json!({ "transactions": rows })
    }
}
