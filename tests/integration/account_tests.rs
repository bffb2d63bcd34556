// Integration tests for brokerage endpoints

use crate::common;
use mockito::{Matcher, Server};
use serde_json::json;
use ts_client::prelude::*;

#[tokio::test]
async fn test_get_accounts_unwraps_accounts() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/brokerage/accounts")
        .match_header("authorization", common::bearer())
        .match_header("accept", JSON_CONTENT_TYPE)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"Accounts": [
                {"AccountID": "123456", "AccountType": "Cash", "Currency": "USD"},
                {"AccountID": "123457", "AccountType": "Margin", "Currency": "USD"}
            ]})
            .to_string(),
        )
        .create_async()
        .await;

    let client = common::mock_client(&server);
    let accounts = client.get_accounts().await.unwrap();

    assert_eq!(accounts.as_array().map(Vec::len), Some(2));
    assert_eq!(accounts[1]["AccountType"], "Margin");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_positions_for_several_accounts() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/brokerage/accounts/123456,123457/positions")
        .match_query(common::query(&[("symbol", "MSFT")]))
        .with_status(200)
        .with_body(
            json!({"Positions": [{"AccountID": "123456", "Symbol": "MSFT", "Quantity": "10"}],
                   "Errors": []})
            .to_string(),
        )
        .create_async()
        .await;

    let client = common::mock_client(&server);
    let positions = client
        .get_positions("123456,123457", Some("MSFT"))
        .await
        .unwrap();

    assert_eq!(positions[0]["Quantity"], "10");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_orders_pages_with_default_size() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/brokerage/accounts/123456/orders")
        .match_query(common::query(&[("pageSize", "600")]))
        .with_status(200)
        .with_body(json!({"Orders": [], "NextToken": "abc"}).to_string())
        .create_async()
        .await;

    let client = common::mock_client(&server);
    let orders = client.get_orders("123456", None, None).await.unwrap();

    assert_eq!(orders, json!([]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_expired_token_is_reported_as_unauthorized() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/brokerage/accounts/123456/balances")
        .with_status(401)
        .with_body(json!({"Error": "Unauthorized", "Message": "Access token expired"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = common::mock_client(&server);
    let err = client.get_balances("123456").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.endpoint(), Some("get_balances"));
    assert_eq!(err.upstream_message().as_deref(), Some("Access token expired"));
    // never retried
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_field_is_malformed() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v3/brokerage/accounts/123456/wallets")
        .with_status(200)
        .with_body(json!({"Errors": []}).to_string())
        .create_async()
        .await;

    let client = common::mock_client(&server);
    let err = client.get_wallets("123456").await.unwrap_err();

    assert!(matches!(err, AppError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_stream_orders_reads_records_until_end() {
    let mut server = Server::new_async().await;
    let body = [
        json!({"AccountID": "123456", "OrderID": "1", "Status": "OPN"}),
        json!({"StreamStatus": "EndSnapshot"}),
        json!({"Heartbeat": 1, "Timestamp": "2026-10-18T14:00:00Z"}),
    ]
    .iter()
    .map(|record| format!("{record}\n"))
    .collect::<String>();
    let mock = server
        .mock("GET", "/v3/brokerage/stream/accounts/123456/orders")
        .match_header("authorization", common::bearer())
        .match_header("accept", STREAM_CONTENT_TYPE)
        .with_status(200)
        .with_header("content-type", STREAM_CONTENT_TYPE)
        .with_body(body)
        .create_async()
        .await;

    let client = common::mock_client(&server);
    let mut orders = client.stream_orders("123456").await.unwrap();

    let mut events = Vec::new();
    while let Some(record) = orders.next().await {
        events.push(StreamEvent::from(record.unwrap()));
    }

    assert_eq!(events.len(), 3);
    assert!(matches!(&events[0], StreamEvent::Data(order) if order["OrderID"] == "1"));
    assert_eq!(events[1], StreamEvent::Status("EndSnapshot".to_string()));
    assert!(matches!(events[2], StreamEvent::Heartbeat(_)));
    assert!(!orders.is_open());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_stream_positions_with_changes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/brokerage/stream/accounts/123456/positions")
        .match_query(Matcher::UrlEncoded("changes".into(), "true".into()))
        .with_status(200)
        .with_body("{\"Symbol\":\"MSFT\",\"Quantity\":\"10\"}\n")
        .create_async()
        .await;

    let client = common::mock_client(&server);
    let positions = client.stream_positions("123456", Some(true)).await.unwrap();
    let records: Vec<_> = positions.collect().await;

    assert_eq!(records.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_stream_rejected_before_first_record() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v3/brokerage/stream/accounts/123456/wallets")
        .with_status(403)
        .with_body("{\"Error\":\"Forbidden\"}")
        .create_async()
        .await;

    let client = common::mock_client(&server);
    let err = client.stream_wallets("123456").await.unwrap_err();

    assert_eq!(err.status(), Some(reqwest::StatusCode::FORBIDDEN));
}
