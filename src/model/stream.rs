/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Record streams for long-lived streaming endpoints
//!
//! Streaming endpoints keep the connection open and push newline delimited
//! JSON records. [`RecordStream`] turns the raw chunked body into a lazy
//! sequence of records: a chunk is only read when the consumer polls, at most
//! one partial record is buffered, and closing or dropping the stream
//! releases the connection exactly once. Once ended or closed it never
//! yields again.

use crate::error::AppError;
use crate::transport::http_client::ByteStream;
use futures_util::Stream;
use serde_json::Value;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::debug;

/// Lazy, cancellable, non-restartable sequence of JSON records
pub struct RecordStream {
    endpoint: &'static str,
    body: Option<ByteStream>,
    buffer: Vec<u8>,
    max_record_bytes: usize,
}

impl RecordStream {
    /// Wraps a response body
    #[must_use]
    pub fn new(endpoint: &'static str, body: ByteStream, max_record_bytes: usize) -> Self {
        Self {
            endpoint,
            body: Some(body),
            buffer: Vec::new(),
            max_record_bytes,
        }
    }

    /// Name of the endpoint the stream was opened on
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    /// Returns true while the underlying connection is held
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.body.is_some()
    }

    /// Closes the stream and releases the connection
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.body.take().is_some() {
            debug!("{} stream closed", self.endpoint);
        }
    }

    fn parse_record(&self, line: &[u8]) -> Result<Value, AppError> {
        serde_json::from_slice(line).map_err(|e| {
            AppError::malformed(self.endpoint, format!("invalid stream record: {e}"))
        })
    }

    /// Takes the next complete record out of the buffer
    fn next_buffered(&mut self) -> Option<Result<Value, AppError>> {
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = line.trim_ascii();
            if line.is_empty() {
                continue;
            }
            if line.len() > self.max_record_bytes {
                return Some(Err(self.oversized()));
            }
            return Some(self.parse_record(line));
        }
        if self.buffer.len() > self.max_record_bytes {
            return Some(Err(self.oversized()));
        }
        None
    }

    fn oversized(&mut self) -> AppError {
        self.buffer.clear();
        self.release();
        AppError::malformed(
            self.endpoint,
            format!("stream record exceeds {} bytes", self.max_record_bytes),
        )
    }
}

impl Stream for RecordStream {
    type Item = Result<Value, AppError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if let Some(record) = this.next_buffered() {
                return Poll::Ready(Some(record));
            }
            let Some(body) = this.body.as_mut() else {
                return Poll::Ready(None);
            };
            match body.as_mut().poll_next(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Some(Ok(chunk))) => this.buffer.extend_from_slice(&chunk),
                Poll::Ready(Some(Err(e))) => {
                    this.buffer.clear();
                    this.release();
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Ready(None) => {
                    this.release();
                    let rest = std::mem::take(&mut this.buffer);
                    let rest = rest.trim_ascii();
                    if rest.is_empty() {
                        return Poll::Ready(None);
                    }
                    return Poll::Ready(Some(this.parse_record(rest)));
                }
            }
        }
    }
}

impl std::fmt::Debug for RecordStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStream")
            .field("endpoint", &self.endpoint)
            .field("open", &self.is_open())
            .field("buffered", &self.buffer.len())
            .finish()
    }
}

/// Classified stream record
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Payload record (quote, bar, order, position...)
    Data(Value),
    /// Keep-alive record
    Heartbeat(Value),
    /// Stream status change such as `EndSnapshot` or `GoAway`
    Status(String),
    /// Error reported in-band by the API
    Error {
        /// Error code
        error: String,
        /// Human readable message, when provided
        message: Option<String>,
    },
}

impl StreamEvent {
    /// Returns true when the server asks the client to reconnect
    #[must_use]
    pub fn is_go_away(&self) -> bool {
        matches!(self, StreamEvent::Status(status) if status == "GoAway")
    }
}

impl From<Value> for StreamEvent {
    fn from(value: Value) -> Self {
        if value.get("Heartbeat").is_some() {
            return StreamEvent::Heartbeat(value);
        }
        if let Some(status) = value.get("StreamStatus").and_then(Value::as_str) {
            return StreamEvent::Status(status.to_string());
        }
        if let Some(error) = value.get("Error").and_then(Value::as_str) {
            return StreamEvent::Error {
                error: error.to_string(),
                message: value
                    .get("Message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            };
        }
        StreamEvent::Data(value)
    }
}
