use reqwest::StatusCode;
use ts_client::prelude::*;

#[test]
fn test_request_failed_display() {
    let err = AppError::RequestFailed {
        endpoint: "get_accounts".to_string(),
        status: Some(StatusCode::UNAUTHORIZED),
        body: "{\"Error\":\"Unauthorized\"}".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "request failed for get_accounts (401): {\"Error\":\"Unauthorized\"}"
    );
    assert!(err.is_unauthorized());
    assert_eq!(err.upstream_message().as_deref(), Some("Unauthorized"));
}

#[test]
fn test_transport_failure_display() {
    let err = AppError::transport("stream_quotes", "connection reset");
    assert_eq!(
        err.to_string(),
        "request failed for stream_quotes (transport): connection reset"
    );
    assert_eq!(err.status(), None);
    assert!(!err.is_unauthorized());
}

#[test]
fn test_malformed_display() {
    let err = AppError::malformed("get_positions", "missing field 'Positions'");
    assert_eq!(
        err.to_string(),
        "malformed response from get_positions: missing field 'Positions'"
    );
    assert_eq!(err.endpoint(), Some("get_positions"));
    assert_eq!(err.upstream_message(), None);
}

#[test]
fn test_local_errors_have_no_endpoint() {
    let err = AppError::InvalidInput("missing leg".to_string());
    assert_eq!(err.to_string(), "invalid input: missing leg");
    assert_eq!(err.endpoint(), None);

    let err = AppError::Config("TS_ACCESS_TOKEN is not set".to_string());
    assert_eq!(
        err.to_string(),
        "configuration error: TS_ACCESS_TOKEN is not set"
    );
    assert_eq!(err.status(), None);
}
