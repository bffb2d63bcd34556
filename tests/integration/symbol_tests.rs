// Integration tests for symbol lookup

use crate::common;
use mockito::Server;
use serde_json::json;
use ts_client::prelude::*;

#[tokio::test]
async fn test_suggest_symbols() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/data/symbols/suggest/MSF")
        .match_query(common::query(&[("$top", "5"), ("$filter", "Category eq 'Stock'")]))
        .with_status(200)
        .with_body(json!([{"Name": "MSFT", "Category": "Stock"}]).to_string())
        .create_async()
        .await;

    let client = common::mock_client(&server);
    let suggestions = client
        .suggest_symbols("MSF", Some(5), Some("Category eq 'Stock'"))
        .await
        .unwrap();

    assert_eq!(suggestions[0]["Name"], "MSFT");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_symbols() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/data/symbols/search/n=MSFT")
        .with_status(200)
        .with_body(json!([{"Name": "MSFT"}]).to_string())
        .create_async()
        .await;

    let client = common::mock_client(&server);
    let found = client.search_symbols("n=MSFT").await.unwrap();

    assert_eq!(found, json!([{"Name": "MSFT"}]));
    mock.assert_async().await;
}
