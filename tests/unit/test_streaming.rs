use crate::common::{self, MockTransport};
use futures_util::StreamExt;
use reqwest::StatusCode;
use ts_client::prelude::*;

fn quote_chunks() -> Vec<String> {
    vec![
        "{\"Symbol\":\"MSFT\",\"Last\":\"410.1\"}\n".to_string(),
        "{\"Heartbeat\":1,\"Timestamp\":\"2026-10-18T14:00:00Z\"}\n".to_string(),
        "{\"Symbol\":\"MSFT\",\"Last\":\"410.2\"}\n".to_string(),
    ]
}

#[tokio::test]
async fn cancelling_a_stream_closes_the_connection_once() {
    let transport = MockTransport::chunks(StatusCode::OK, quote_chunks(), true);
    let client = common::client_with(transport.clone());

    let mut quotes = client.stream_quotes("MSFT").await.unwrap();
    let first = quotes.next().await.unwrap().unwrap();
    assert_eq!(first["Last"], "410.1");
    assert_eq!(transport.closed(), 0);

    quotes.close();
    assert_eq!(transport.closed(), 1);
}

#[tokio::test]
async fn dropping_a_stream_closes_the_connection_once() {
    let transport = MockTransport::chunks(StatusCode::OK, quote_chunks(), true);
    let client = common::client_with(transport.clone());

    {
        let mut quotes = client.stream_quotes("MSFT").await.unwrap();
        quotes.next().await.unwrap().unwrap();
    }
    assert_eq!(transport.closed(), 1);
}

#[tokio::test]
async fn stream_is_lazy() {
    let transport = MockTransport::chunks(StatusCode::OK, quote_chunks(), true);
    let client = common::client_with(transport.clone());

    let mut quotes = client.stream_quotes("MSFT").await.unwrap();
    assert_eq!(transport.polled(), 0);

    quotes.next().await.unwrap().unwrap();
    assert_eq!(transport.polled(), 1);
    quotes.next().await.unwrap().unwrap();
    assert_eq!(transport.polled(), 2);
}

#[tokio::test]
async fn exhausted_stream_is_not_restartable() {
    let transport = MockTransport::chunks(StatusCode::OK, quote_chunks(), false);
    let client = common::client_with(transport.clone());

    let mut quotes = client.stream_quotes("MSFT").await.unwrap();
    let events: Vec<StreamEvent> = quotes
        .by_ref()
        .map(|record| StreamEvent::from(record.unwrap()))
        .collect()
        .await;

    assert_eq!(events.len(), 3);
    assert!(matches!(events[1], StreamEvent::Heartbeat(_)));
    assert!(!quotes.is_open());
    assert_eq!(transport.closed(), 1);
    assert!(quotes.next().await.is_none());
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn stream_requests_carry_stream_accept_header_and_defaults() {
    let transport = MockTransport::chunks(StatusCode::OK, vec![], false);
    let client = common::client_with(transport.clone());

    client.stream_market_depth_quotes("MSFT", None).await.unwrap();
    let request = transport.last_request();
    assert!(request.streaming);
    assert_eq!(request.header("Accept"), Some(STREAM_CONTENT_TYPE));
    assert_eq!(request.url.path(), "/v3/marketdata/stream/marketdepth/quotes/MSFT");
    assert_eq!(request.url.query(), Some("maxlevels=20"));

    client
        .stream_option_chain(&OptionChainRequest::new("AAPL"))
        .await
        .unwrap();
    assert_eq!(
        transport.last_request().url.query(),
        Some("spreadType=Single&strikeInterval=1&enableGreeks=true&strikeRange=All&optionType=All")
    );

    client
        .stream_bars(&BarsRequest::new("MSFT").with_barsback(10))
        .await
        .unwrap();
    assert_eq!(
        transport.last_request().url.query(),
        Some("interval=1&unit=Daily&barsback=10")
    );
}

#[tokio::test]
async fn stream_option_quotes_encodes_legs() {
    let transport = MockTransport::chunks(StatusCode::OK, vec![], false);
    let client = common::client_with(transport.clone());

    let request = OptionQuotesRequest::new(vec![
        OptionQuoteLeg::new("MSFT 261218C400"),
        OptionQuoteLeg::new("MSFT 261218C410").with_ratio(-1),
    ]);
    client.stream_option_quotes(&request).await.unwrap();

    let url = transport.last_request().url;
    assert_eq!(url.path(), "/v3/marketdata/stream/options/quotes");
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("legs[0].Symbol".to_string(), "MSFT 261218C400".to_string()),
            ("legs[1].Symbol".to_string(), "MSFT 261218C410".to_string()),
            ("legs[1].Ratio".to_string(), "-1".to_string()),
            ("enableGreeks".to_string(), "true".to_string()),
        ]
    );
}

#[tokio::test]
async fn oversized_record_aborts_stream() {
    let transport = MockTransport::chunks(
        StatusCode::OK,
        vec![format!("{{\"Blob\":\"{}\"}}\n", "x".repeat(64))],
        true,
    );
    let client = common::client_with(transport.clone()).with_max_record_bytes(32);

    let mut orders = client.stream_orders("123").await.unwrap();
    let err = orders.next().await.unwrap().unwrap_err();

    assert!(matches!(err, AppError::MalformedResponse { .. }));
    assert_eq!(transport.closed(), 1);
    assert!(orders.next().await.is_none());
}

#[tokio::test]
async fn in_band_errors_are_classified() {
    let transport = MockTransport::chunks(
        StatusCode::OK,
        vec![
            "{\"StreamStatus\":\"EndSnapshot\"}\n".to_string(),
            "{\"Error\":\"Failed\",\"Message\":\"Symbol not found\"}\n".to_string(),
        ],
        false,
    );
    let client = common::client_with(transport);

    let events: Vec<StreamEvent> = client
        .stream_positions("123", Some(true))
        .await
        .unwrap()
        .map(|record| StreamEvent::from(record.unwrap()))
        .collect()
        .await;

    assert_eq!(events[0], StreamEvent::Status("EndSnapshot".to_string()));
    assert_eq!(
        events[1],
        StreamEvent::Error {
            error: "Failed".to_string(),
            message: Some("Symbol not found".to_string())
        }
    );
}
