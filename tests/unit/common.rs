// Shared helpers for unit tests: an in-process transport recording requests
#![allow(dead_code)]


use async_trait::async_trait;
use futures_util::stream::{self, BoxStream};
use futures_util::{Stream, StreamExt};
use reqwest::StatusCode;
use serde_json::Value;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use ts_client::prelude::*;

pub const TOKEN: &str = "test-token";

/// Counts how many times the response body was released
struct CloseGuard(Arc<AtomicUsize>);

impl Drop for CloseGuard {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Body stream that records polls and releases
struct TrackedBody {
    inner: BoxStream<'static, Result<Vec<u8>, AppError>>,
    polled: Arc<AtomicUsize>,
    _guard: CloseGuard,
}

impl Stream for TrackedBody {
    type Item = Result<Vec<u8>, AppError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let poll = self.inner.as_mut().poll_next(cx);
        if let Poll::Ready(Some(_)) = &poll {
            self.polled.fetch_add(1, Ordering::SeqCst);
        }
        poll
    }
}

/// Transport answering every request with a fixed status and body
pub struct MockTransport {
    status: StatusCode,
    chunks: Vec<Vec<u8>>,
    hold_open: bool,
    pub requests: Mutex<Vec<PreparedRequest>>,
    pub closed: Arc<AtomicUsize>,
    pub polled: Arc<AtomicUsize>,
}

impl MockTransport {
    pub fn json(status: StatusCode, body: &Value) -> Arc<Self> {
        Self::chunks(status, vec![body.to_string()], false)
    }

    pub fn text(status: StatusCode, body: &str) -> Arc<Self> {
        Self::chunks(status, vec![body.to_string()], false)
    }

    /// Body made of the given chunks; with `hold_open` the body never ends
    pub fn chunks(status: StatusCode, chunks: Vec<String>, hold_open: bool) -> Arc<Self> {
        Arc::new(Self {
            status,
            chunks: chunks.into_iter().map(String::into_bytes).collect(),
            hold_open,
            requests: Mutex::new(Vec::new()),
            closed: Arc::new(AtomicUsize::new(0)),
            polled: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn last_request(&self) -> PreparedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn polled(&self) -> usize {
        self.polled.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: PreparedRequest) -> Result<TransportResponse, AppError> {
        self.requests.lock().unwrap().push(request);
        let chunks = stream::iter(self.chunks.clone().into_iter().map(Ok));
        let inner = if self.hold_open {
            chunks.chain(stream::pending()).boxed()
        } else {
            chunks.boxed()
        };
        let body = TrackedBody {
            inner,
            polled: self.polled.clone(),
            _guard: CloseGuard(self.closed.clone()),
        };
        Ok(TransportResponse {
            status: self.status,
            body: body.boxed(),
        })
    }
}

/// Transport failing before any response is received
pub struct FailingTransport;

#[async_trait]
impl HttpTransport for FailingTransport {
    async fn send(&self, request: PreparedRequest) -> Result<TransportResponse, AppError> {
        Err(AppError::transport(request.endpoint, "connection refused"))
    }
}

pub fn session() -> Session {
    Session::new(LIVE_API_BASE_URL, TOKEN).expect("valid session")
}

pub fn client_with(transport: Arc<MockTransport>) -> Client {
    Client::with_transport(transport, session())
}

/// Path arguments filling every placeholder of the endpoint
pub fn path_args(endpoint: &Endpoint) -> Vec<&'static str> {
    vec!["X1"; endpoint.placeholder_count()]
}
