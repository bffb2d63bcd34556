use crate::common::{self, FailingTransport, MockTransport, TOKEN};
use reqwest::StatusCode;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use ts_client::application::endpoints::{self, brokerage, market_data};
use ts_client::prelude::*;

#[tokio::test]
async fn execute_returns_unwrapped_field_for_every_json_endpoint() {
    for endpoint in endpoints::all().filter(|e| !e.streaming) {
        let mut body = json!({"Errors": []});
        match endpoint.unwrap {
            Some(field) => body[field] = json!([{"Id": 1}]),
            None => body["Whole"] = json!(true),
        }
        for field in endpoint.required {
            body[*field] = json!("present");
        }
        let transport = MockTransport::json(StatusCode::OK, &body);
        let dispatcher = Dispatcher::new(transport.clone(), common::session());
        let payload = json!({});
        let result = dispatcher
            .execute(
                endpoint,
                &common::path_args(endpoint),
                &QueryArgs::new(),
                Some(&payload),
            )
            .await
            .unwrap_or_else(|e| panic!("{} failed: {e}", endpoint.name));

        let expected = match endpoint.unwrap {
            Some(field) => body[field].clone(),
            None if endpoint.required.is_empty() => body.clone(),
            None => endpoint
                .required
                .iter()
                .map(|field| (field.to_string(), json!("present")))
                .collect::<serde_json::Map<_, _>>()
                .into(),
        };
        assert_eq!(result, expected, "{}", endpoint.name);
        assert_eq!(transport.last_request().method, endpoint.verb.method());
    }
}

#[tokio::test]
async fn execute_fails_with_status_for_every_endpoint() {
    for status in [StatusCode::UNAUTHORIZED, StatusCode::INTERNAL_SERVER_ERROR] {
        for endpoint in endpoints::all() {
            let transport = MockTransport::text(status, r#"{"Error":"Failed","Message":"boom"}"#);
            let dispatcher = Dispatcher::new(transport, common::session());
            let args = common::path_args(endpoint);
            let err = if endpoint.streaming {
                dispatcher
                    .execute_stream(endpoint, &args, &QueryArgs::new())
                    .await
                    .unwrap_err()
            } else {
                dispatcher
                    .execute::<()>(endpoint, &args, &QueryArgs::new(), None)
                    .await
                    .unwrap_err()
            };
            match err {
                AppError::RequestFailed {
                    endpoint: name,
                    status: got,
                    body,
                } => {
                    assert_eq!(got, Some(status), "{}", endpoint.name);
                    assert_eq!(name, endpoint.name);
                    assert!(body.contains("boom"));
                }
                other => panic!("{}: unexpected error {other:?}", endpoint.name),
            }
        }
    }
}

#[tokio::test]
async fn execute_reports_missing_field_as_malformed() {
    for endpoint in endpoints::all().filter(|e| e.unwrap.is_some() || !e.required.is_empty()) {
        let transport = MockTransport::json(StatusCode::OK, &json!({"Unexpected": []}));
        let dispatcher = Dispatcher::new(transport, common::session());
        let payload = json!({});
        let err = dispatcher
            .execute(
                endpoint,
                &common::path_args(endpoint),
                &QueryArgs::new(),
                Some(&payload),
            )
            .await
            .unwrap_err();
        assert!(
            matches!(err, AppError::MalformedResponse { endpoint: ref name, .. } if name == endpoint.name),
            "{}: {err:?}",
            endpoint.name
        );
    }
}

#[tokio::test]
async fn execute_reports_invalid_json_as_malformed() {
    let transport = MockTransport::text(StatusCode::OK, "<html>maintenance</html>");
    let dispatcher = Dispatcher::new(transport, common::session());
    let err = dispatcher
        .execute::<()>(&brokerage::GET_ACCOUNTS, &[], &QueryArgs::new(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse { .. }));
}

#[tokio::test]
async fn transport_failure_is_request_failed_without_status() {
    let dispatcher = Dispatcher::new(Arc::new(FailingTransport), common::session());
    let err = dispatcher
        .execute::<()>(&brokerage::GET_ACCOUNTS, &[], &QueryArgs::new(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::RequestFailed { status: None, .. }));
    assert_eq!(err.endpoint(), Some("get_accounts"));
}

#[test]
fn omitted_optional_params_never_reach_the_query_string() {
    let session = common::session();
    for endpoint in endpoints::all() {
        let request = ts_client::model::http::build_request(
            &session,
            endpoint,
            &common::path_args(endpoint),
            &QueryArgs::new(),
            None,
        )
        .unwrap();
        for (name, value) in request.url.query_pairs() {
            let value: &str = &value;
            let param = endpoint
                .query_param(&name)
                .unwrap_or_else(|| panic!("{}: undeclared {name}", endpoint.name));
            assert_ne!(param.default, ParamDefault::Omit, "{}: {name}", endpoint.name);
            assert!(
                !["undefined", "None", "null", ""].contains(&value),
                "{}: {name}={value}",
                endpoint.name
            );
        }
    }
}

#[test]
fn streaming_endpoints_ask_for_stream_content_type() {
    let session = common::session();
    for endpoint in endpoints::all() {
        let request = ts_client::model::http::build_request(
            &session,
            endpoint,
            &common::path_args(endpoint),
            &QueryArgs::new(),
            None,
        )
        .unwrap();
        let expected = if endpoint.streaming {
            STREAM_CONTENT_TYPE
        } else {
            JSON_CONTENT_TYPE
        };
        assert_eq!(request.header("Accept"), Some(expected), "{}", endpoint.name);
        assert_eq!(
            request.header("Authorization"),
            Some(format!("Bearer {TOKEN}").as_str())
        );
    }
}

#[tokio::test]
async fn json_and_stream_entry_points_are_not_interchangeable() {
    let transport = MockTransport::json(StatusCode::OK, &json!({}));
    let dispatcher = Dispatcher::new(transport.clone(), common::session());
    let err = dispatcher
        .execute::<()>(&market_data::STREAM_QUOTES, &["MSFT"], &QueryArgs::new(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    let err = dispatcher
        .execute_stream(&market_data::GET_QUOTE_SNAPSHOTS, &["MSFT"], &QueryArgs::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn undeclared_query_parameter_fails_before_sending() {
    let transport = MockTransport::json(StatusCode::OK, &json!({"Positions": []}));
    let dispatcher = Dispatcher::new(transport.clone(), common::session());
    let err = dispatcher
        .execute::<()>(
            &brokerage::GET_POSITIONS,
            &["1"],
            &QueryArgs::new().with("pageSize", 10),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn replaced_session_does_not_resign_built_requests() {
    let transport = MockTransport::json(StatusCode::OK, &json!({"Accounts": []}));
    let dispatcher = Dispatcher::new(transport.clone(), common::session());

    let built = dispatcher
        .prepare(&brokerage::GET_ACCOUNTS, &[], &QueryArgs::new(), None)
        .await
        .unwrap();
    dispatcher
        .replace_session(Session::new(LIVE_API_BASE_URL, "refreshed").unwrap())
        .await;

    assert_eq!(built.header("Authorization"), Some("Bearer test-token"));
    dispatcher
        .execute::<()>(&brokerage::GET_ACCOUNTS, &[], &QueryArgs::new(), None)
        .await
        .unwrap();
    assert_eq!(
        transport.last_request().header("Authorization"),
        Some("Bearer refreshed")
    );
}

#[tokio::test]
async fn execute_as_deserializes_unwrapped_value() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Account {
        #[serde(rename = "AccountID")]
        account_id: String,
    }

    let body = json!({"Accounts": [{"AccountID": "123456", "Currency": "USD"}]});
    let dispatcher = Dispatcher::new(MockTransport::json(StatusCode::OK, &body), common::session());
    let accounts: Vec<Account> = dispatcher
        .execute_as::<_, ()>(&brokerage::GET_ACCOUNTS, &[], &QueryArgs::new(), None)
        .await
        .unwrap();
    assert_eq!(accounts, vec![Account { account_id: "123456".to_string() }]);

    let err = dispatcher
        .execute_as::<Vec<u32>, ()>(&brokerage::GET_ACCOUNTS, &[], &QueryArgs::new(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse { .. }));
}

#[derive(Default)]
struct CountingObserver {
    requests: AtomicUsize,
    errors: AtomicUsize,
}

impl RequestObserver for CountingObserver {
    fn on_request(&self, _endpoint: &Endpoint, _url: &reqwest::Url) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }

    fn on_error(&self, _endpoint: &Endpoint, _error: &AppError) {
        self.errors.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn observer_sees_errors_that_are_still_returned() {
    let observer = Arc::new(CountingObserver::default());
    let transport = MockTransport::text(StatusCode::INTERNAL_SERVER_ERROR, "oops");
    let dispatcher =
        Dispatcher::new(transport, common::session()).with_observer(observer.clone());

    let result = dispatcher
        .execute::<()>(&brokerage::GET_ACCOUNTS, &[], &QueryArgs::new(), None)
        .await;

    assert!(result.is_err());
    assert_eq!(observer.requests.load(Ordering::SeqCst), 1);
    assert_eq!(observer.errors.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn silent_without_observer() {
    let transport = MockTransport::text(StatusCode::INTERNAL_SERVER_ERROR, "oops");
    let dispatcher = Dispatcher::new(transport, common::session());
    let err = dispatcher
        .execute::<()>(&brokerage::GET_ACCOUNTS, &[], &QueryArgs::new(), None)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}
