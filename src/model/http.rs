/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Request dispatcher
//!
//! Every endpoint of the client goes through [`Dispatcher`]: it builds the URL
//! from the descriptor, signs the request with the current session token,
//! hands it to the transport and normalizes the response into either the
//! unwrapped JSON value or a [`RecordStream`].

use crate::application::observer::RequestObserver;
use crate::application::session::Session;
use crate::constants::{DEFAULT_MAX_RECORD_BYTES, JSON_CONTENT_TYPE, STREAM_CONTENT_TYPE};
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::query::QueryArgs;
use crate::model::stream::RecordStream;
use crate::transport::http_client::{ByteStream, HttpTransport, PreparedRequest};
use futures_util::TryStreamExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Builds the request for `endpoint` against `session`
///
/// Path arguments fill the `{}` placeholders of the template in order and are
/// percent-escaped as path segments. Query parameters are resolved against
/// the descriptor's declared defaults; absent optional ones are left out.
pub fn build_request(
    session: &Session,
    endpoint: &'static Endpoint,
    path_args: &[&str],
    query: &QueryArgs,
    body: Option<Value>,
) -> Result<PreparedRequest, AppError> {
    let expected = endpoint.placeholder_count();
    if path_args.len() != expected {
        return Err(AppError::InvalidInput(format!(
            "{} expects {} path argument(s), got {}",
            endpoint.name,
            expected,
            path_args.len()
        )));
    }
    if let Some(position) = path_args.iter().position(|arg| arg.trim().is_empty()) {
        return Err(AppError::InvalidInput(format!(
            "{} path argument {} is empty",
            endpoint.name, position
        )));
    }
    // URL normalization would drop these segments and address another resource
    if let Some(arg) = path_args.iter().find(|arg| matches!(**arg, "." | "..")) {
        return Err(AppError::InvalidInput(format!(
            "{} path argument '{}' is not a valid identifier",
            endpoint.name, arg
        )));
    }

    let mut url = session.base_url().clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| AppError::Config(format!("base url '{}' cannot carry a path", session.base_url())))?;
        segments.pop_if_empty();
        segments.extend(endpoint.domain.base_path().split('/'));
        let mut args = path_args.iter();
        for segment in endpoint.path.split('/').filter(|s| !s.is_empty()) {
            match segment {
                "{}" => {
                    if let Some(arg) = args.next() {
                        segments.push(arg);
                    }
                }
                literal => {
                    segments.push(literal);
                }
            }
        }
    }

    let pairs = query.resolve(endpoint)?;
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    let accept = if endpoint.streaming {
        STREAM_CONTENT_TYPE
    } else {
        JSON_CONTENT_TYPE
    };

    Ok(PreparedRequest {
        endpoint: endpoint.name,
        method: endpoint.verb.method(),
        url,
        headers: vec![
            ("Authorization", session.authorization()),
            ("Accept", accept.to_string()),
        ],
        body,
        streaming: endpoint.streaming,
    })
}

/// Extracts the descriptor's unwrap field from a response body
///
/// Whole-body endpoints declaring required fields get back an object holding
/// exactly those fields; a missing one is a malformed response.
pub fn unwrap_body(endpoint: &Endpoint, body: Value) -> Result<Value, AppError> {
    let Some(field) = endpoint.unwrap else {
        return keep_required(endpoint, body);
    };
    match body {
        Value::Object(mut map) => map.remove(field).ok_or_else(|| {
            AppError::malformed(endpoint.name, format!("missing field '{field}'"))
        }),
        other => Err(AppError::malformed(
            endpoint.name,
            format!("expected an object with field '{field}', got {}", kind_of(&other)),
        )),
    }
}

fn keep_required(endpoint: &Endpoint, body: Value) -> Result<Value, AppError> {
    if endpoint.required.is_empty() {
        return Ok(body);
    }
    let Value::Object(mut map) = body else {
        return Err(AppError::malformed(
            endpoint.name,
            format!("expected an object, got {}", kind_of(&body)),
        ));
    };
    let mut kept = serde_json::Map::with_capacity(endpoint.required.len());
    for field in endpoint.required {
        let value = map.remove(*field).ok_or_else(|| {
            AppError::malformed(endpoint.name, format!("missing field '{field}'"))
        })?;
        kept.insert((*field).to_string(), value);
    }
    Ok(Value::Object(kept))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

async fn read_body(endpoint: &str, body: ByteStream) -> Result<Vec<u8>, AppError> {
    body.try_concat()
        .await
        .map_err(|e| match e {
            AppError::RequestFailed { body, status, .. } => AppError::RequestFailed {
                endpoint: endpoint.to_string(),
                status,
                body,
            },
            other => other,
        })
}

/// Single entry point for every API call
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn HttpTransport>,
    session: Arc<RwLock<Session>>,
    observer: Option<Arc<dyn RequestObserver>>,
    max_record_bytes: usize,
}

impl Dispatcher {
    /// Creates a dispatcher sending through `transport` with the given session
    pub fn new(transport: Arc<dyn HttpTransport>, session: Session) -> Self {
        Self {
            transport,
            session: Arc::new(RwLock::new(session)),
            observer: None,
            max_record_bytes: DEFAULT_MAX_RECORD_BYTES,
        }
    }

    /// Installs an observer notified around each request
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Sets the largest streamed record accepted
    #[must_use]
    pub fn with_max_record_bytes(mut self, max_record_bytes: usize) -> Self {
        self.max_record_bytes = max_record_bytes;
        self
    }

    /// Snapshot of the current session
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Replaces the session used by requests built from now on
    ///
    /// Requests already built keep the token they were signed with.
    pub async fn replace_session(&self, session: Session) {
        *self.session.write().await = session;
        debug!("session replaced");
    }

    /// Builds the request for `endpoint` with a snapshot of the current session
    pub async fn prepare(
        &self,
        endpoint: &'static Endpoint,
        path_args: &[&str],
        query: &QueryArgs,
        body: Option<Value>,
    ) -> Result<PreparedRequest, AppError> {
        let session = self.session().await;
        build_request(&session, endpoint, path_args, query, body)
    }

    /// Executes a JSON endpoint and returns the unwrapped value
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        endpoint: &'static Endpoint,
        path_args: &[&str],
        query: &QueryArgs,
        body: Option<&B>,
    ) -> Result<Value, AppError> {
        let result = self.run_json(endpoint, path_args, query, body).await;
        self.report(endpoint, result)
    }

    /// Executes a JSON endpoint and deserializes the unwrapped value
    pub async fn execute_as<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &'static Endpoint,
        path_args: &[&str],
        query: &QueryArgs,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let value = self.execute(endpoint, path_args, query, body).await?;
        let result = serde_json::from_value(value)
            .map_err(|e| AppError::malformed(endpoint.name, e.to_string()));
        self.report(endpoint, result)
    }

    /// Opens a streaming endpoint
    ///
    /// The returned stream holds the connection until it ends, is closed or
    /// is dropped.
    pub async fn execute_stream(
        &self,
        endpoint: &'static Endpoint,
        path_args: &[&str],
        query: &QueryArgs,
    ) -> Result<RecordStream, AppError> {
        let result = self.run_stream(endpoint, path_args, query).await;
        self.report(endpoint, result)
    }

    async fn run_json<B: Serialize + ?Sized>(
        &self,
        endpoint: &'static Endpoint,
        path_args: &[&str],
        query: &QueryArgs,
        body: Option<&B>,
    ) -> Result<Value, AppError> {
        if endpoint.streaming {
            return Err(AppError::InvalidInput(format!(
                "{} is a streaming endpoint",
                endpoint.name
            )));
        }
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| AppError::InvalidInput(format!("cannot encode body: {e}")))?;

        let request = self.prepare(endpoint, path_args, query, body).await?;
        let body = self.send(endpoint, request).await?;
        let bytes = read_body(endpoint.name, body).await?;
        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::malformed(endpoint.name, format!("invalid JSON body: {e}")))?;
        unwrap_body(endpoint, value)
    }

    async fn run_stream(
        &self,
        endpoint: &'static Endpoint,
        path_args: &[&str],
        query: &QueryArgs,
    ) -> Result<RecordStream, AppError> {
        if !endpoint.streaming {
            return Err(AppError::InvalidInput(format!(
                "{} is not a streaming endpoint",
                endpoint.name
            )));
        }
        let request = self.prepare(endpoint, path_args, query, None).await?;
        let body = self.send(endpoint, request).await?;
        Ok(RecordStream::new(endpoint.name, body, self.max_record_bytes))
    }

    /// Sends the request and turns non-2xx statuses into `RequestFailed`
    async fn send(
        &self,
        endpoint: &'static Endpoint,
        request: PreparedRequest,
    ) -> Result<ByteStream, AppError> {
        debug!("{} {}", request.method, request.url);
        if let Some(observer) = &self.observer {
            observer.on_request(endpoint, &request.url);
        }

        let response = self.transport.send(request).await?;
        if let Some(observer) = &self.observer {
            observer.on_response(endpoint, response.status);
        }

        if response.status.is_success() {
            return Ok(response.body);
        }

        let body = read_body(endpoint.name, response.body)
            .await
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default();
        Err(AppError::RequestFailed {
            endpoint: endpoint.name.to_string(),
            status: Some(response.status),
            body,
        })
    }

    fn report<T>(&self, endpoint: &Endpoint, result: Result<T, AppError>) -> Result<T, AppError> {
        if let (Err(err), Some(observer)) = (&result, &self.observer) {
            observer.on_error(endpoint, err);
        }
        result
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("observer", &self.observer.is_some())
            .field("max_record_bytes", &self.max_record_bytes)
            .finish()
    }
}
