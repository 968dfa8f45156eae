use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::Clients;
use super::explorer::{MARKET_FETCH_FAILED, STATE_CHANGES_FETCH_FAILED, TRANSACTION_FETCH_FAILED};
use super::history::HISTORY_FETCH_FAILED;
use crate::domain::{ApiError, EthereumData};
use crate::state::AppConfig;
use crate::test_utils::JsonMother;

fn clients_for(server: &MockServer) -> Clients {
    let config = AppConfig::default().with_overrides(Some(server.uri()), Some(server.uri()));
    Clients::from_config(&config).expect("client should build")
}

async fn mount(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

// ========================================================================
// Transaction Detail
// ========================================================================

#[tokio::test]
async fn test_transaction_detail_success() {
    let server = MockServer::start().await;
    let route = format!("/api/transaction_detail/{}", JsonMother::TX_HASH);
    mount(
        &server,
        &route,
        ResponseTemplate::new(200).set_body_json(JsonMother::transaction()),
    )
    .await;

    let txn = clients_for(&server)
        .explorer
        .get_transaction_detail(JsonMother::TX_HASH)
        .await
        .unwrap();
    assert_eq!(txn.hash, JsonMother::TX_HASH);
    assert!(txn.gas_metrics.is_some());
}

#[tokio::test]
async fn test_transaction_detail_not_found() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/transaction_detail/0xmissing",
        ResponseTemplate::new(404),
    )
    .await;

    let err = clients_for(&server)
        .explorer
        .get_transaction_detail("0xmissing")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    assert_eq!(err.to_string(), "Transaction not found");
}

#[tokio::test]
async fn test_transaction_detail_server_error_is_generic() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/transaction_detail/0xboom",
        ResponseTemplate::new(500).set_body_json(json!({"detail": "db down"})),
    )
    .await;

    let err = clients_for(&server)
        .explorer
        .get_transaction_detail("0xboom")
        .await
        .unwrap_err();
    assert_eq!(err.user_message(TRANSACTION_FETCH_FAILED), TRANSACTION_FETCH_FAILED);
}

#[tokio::test]
async fn test_transaction_detail_empty_body() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/transaction_detail/0xempty",
        ResponseTemplate::new(200).set_body_string(""),
    )
    .await;
    mount(
        &server,
        "/api/transaction_detail/0xnull",
        ResponseTemplate::new(200).set_body_json(json!(null)),
    )
    .await;

    let explorer = clients_for(&server).explorer;
    for hash in ["0xempty", "0xnull"] {
        let err = explorer.get_transaction_detail(hash).await.unwrap_err();
        assert!(matches!(err, ApiError::EmptyPayload), "{hash}: {err}");
    }
}

#[tokio::test]
async fn test_transaction_detail_network_failure() {
    // Nothing listens on the discard port.
    let config = AppConfig::default().with_overrides(Some("http://127.0.0.1:9".into()), None);
    let clients = Clients::from_config(&config).unwrap();

    let err = clients
        .explorer
        .get_transaction_detail("0xabc")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.user_message(TRANSACTION_FETCH_FAILED), TRANSACTION_FETCH_FAILED);
}

// ========================================================================
// Market Snapshot
// ========================================================================

#[tokio::test]
async fn test_ethereum_data_lenient_fields() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/ethereum_data",
        ResponseTemplate::new(200).set_body_json(json!({
            "jcoPrice": "3000.5",
            "jcoChange": "bad",
            "gasPrice": 21
        })),
    )
    .await;

    let data = clients_for(&server)
        .explorer
        .get_ethereum_data()
        .await
        .unwrap();
    assert_eq!(
        data,
        EthereumData {
            price: 3000.5,
            change: 0.0,
            gas_price: 21.0
        }
    );
}

#[tokio::test]
async fn test_ethereum_data_failure() {
    let server = MockServer::start().await;
    mount(&server, "/api/ethereum_data", ResponseTemplate::new(503)).await;

    let err = clients_for(&server)
        .explorer
        .get_ethereum_data()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), MARKET_FETCH_FAILED);
}

// ========================================================================
// State Changes
// ========================================================================

#[tokio::test]
async fn test_state_changes_success() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/transaction/0xabc/state",
        ResponseTemplate::new(200).set_body_json(JsonMother::state_changes()),
    )
    .await;

    let changes = clients_for(&server)
        .explorer
        .get_state_changes("0xabc")
        .await
        .unwrap();
    assert_eq!(changes.len(), 2);
}

#[tokio::test]
async fn test_state_changes_non_list_coerces_to_empty() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/transaction/0xobj/state",
        ResponseTemplate::new(200).set_body_json(json!({"changes": "soon"})),
    )
    .await;
    mount(
        &server,
        "/api/transaction/0xtext/state",
        ResponseTemplate::new(200).set_body_string("<html>oops</html>"),
    )
    .await;

    let explorer = clients_for(&server).explorer;
    assert!(explorer.get_state_changes("0xobj").await.unwrap().is_empty());
    assert!(explorer.get_state_changes("0xtext").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_state_changes_error_detail() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/transaction/0xbad/state",
        ResponseTemplate::new(400).set_body_json(json!({"detail": "Trace unavailable"})),
    )
    .await;
    mount(
        &server,
        "/api/transaction/0xworse/state",
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let explorer = clients_for(&server).explorer;
    let err = explorer.get_state_changes("0xbad").await.unwrap_err();
    assert_eq!(err.to_string(), "Trace unavailable");

    let err = explorer.get_state_changes("0xworse").await.unwrap_err();
    assert_eq!(err.to_string(), STATE_CHANGES_FETCH_FAILED);
}

// ========================================================================
// History
// ========================================================================

#[tokio::test]
async fn test_history_sends_address_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .and(query_param("address", "0xowner"))
        .respond_with(ResponseTemplate::new(200).set_body_json(JsonMother::history(3)))
        .expect(1)
        .mount(&server)
        .await;

    let txns = clients_for(&server)
        .history
        .get_transactions("0xowner")
        .await
        .unwrap();
    assert_eq!(txns.len(), 3);
}

#[tokio::test]
async fn test_history_failure_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .and(query_param("address", "0xlimited"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"message": "Rate limit"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .and(query_param("address", "0xbroken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let history = clients_for(&server).history;
    let err = history.get_transactions("0xlimited").await.unwrap_err();
    assert_eq!(err.to_string(), "Rate limit");

    let err = history.get_transactions("0xbroken").await.unwrap_err();
    assert_eq!(err.to_string(), HISTORY_FETCH_FAILED);
}
