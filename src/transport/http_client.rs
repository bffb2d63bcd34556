/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! HTTP transport seam
//!
//! The dispatcher hands a fully built [`PreparedRequest`] to an
//! [`HttpTransport`] and gets back the status plus a lazily read body. The
//! default implementation is backed by `reqwest`; tests substitute their own.

use crate::constants::{DEFAULT_REST_TIMEOUT_SECS, USER_AGENT};
use crate::error::AppError;
use async_trait::async_trait;
use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use reqwest::{Client, Method, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Lazily read response body, one chunk per item
///
/// Dropping the stream releases the underlying connection.
pub type ByteStream = BoxStream<'static, Result<Vec<u8>, AppError>>;

/// A request ready to be put on the wire
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// Name of the endpoint descriptor this request was built from
    pub endpoint: &'static str,
    /// HTTP method
    pub method: Method,
    /// Fully qualified URL including the query string
    pub url: Url,
    /// Request headers
    pub headers: Vec<(&'static str, String)>,
    /// JSON body for write verbs
    pub body: Option<Value>,
    /// Whether the connection is held open for a stream
    pub streaming: bool,
}

impl PreparedRequest {
    /// Value of a header, if set
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of a transport response
pub struct TransportResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Body, read on demand
    pub body: ByteStream,
}

/// Sends prepared requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns as soon as the response head is received
    async fn send(&self, request: PreparedRequest) -> Result<TransportResponse, AppError>;
}

/// `reqwest` backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport with the given timeout for non-streaming requests
    ///
    /// Streaming requests are not bounded by the timeout since their
    /// connection is held open until the consumer closes it.
    pub fn new(timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Wraps an existing `reqwest` client
    #[must_use]
    pub fn with_client(client: Client, timeout_secs: u64) -> Self {
        Self {
            client,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::with_client(Client::new(), DEFAULT_REST_TIMEOUT_SECS)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: PreparedRequest) -> Result<TransportResponse, AppError> {
        let endpoint = request.endpoint;
        let mut builder = self.client.request(request.method, request.url);

        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if !request.streaming {
            builder = builder.timeout(self.timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::transport(endpoint, e))?;
        let status = response.status();
        debug!("{} response status: {}", endpoint, status);

        let body = response
            .bytes_stream()
            .map(move |chunk| {
                chunk
                    .map(|bytes| bytes.to_vec())
                    .map_err(|e| AppError::transport(endpoint, e))
            })
            .boxed();

        Ok(TransportResponse { status, body })
    }
}
