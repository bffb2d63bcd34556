/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error type shared by every layer of the client.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the library
///
/// Every failure is returned to the caller as-is. Nothing in the client
/// retries or recovers from an error internally.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request could not be completed or the API answered with a non-2xx status
    ///
    /// `status` is `None` when the failure happened at the transport level
    /// (connection refused, TLS failure, timeout, broken stream...).
    #[error("request failed for {endpoint} ({}): {body}", status_label(.status))]
    RequestFailed {
        /// Name of the endpoint descriptor that was executed
        endpoint: String,
        /// HTTP status returned by the API, if any
        status: Option<StatusCode>,
        /// Raw response body, or the transport error description
        body: String,
    },

    /// The API answered 2xx but the body does not have the expected shape
    #[error("malformed response from {endpoint}: {reason}")]
    MalformedResponse {
        /// Name of the endpoint descriptor that was executed
        endpoint: String,
        /// What was wrong with the body
        reason: String,
    },

    /// The caller supplied arguments that cannot be turned into a request
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The client could not be configured
    #[error("configuration error: {0}")]
    Config(String),
}

fn status_label(status: &Option<StatusCode>) -> String {
    match status {
        Some(status) => status.as_u16().to_string(),
        None => "transport".to_string(),
    }
}

impl AppError {
    /// Builds a `RequestFailed` for a transport level failure
    pub fn transport(endpoint: &str, err: impl std::fmt::Display) -> Self {
        AppError::RequestFailed {
            endpoint: endpoint.to_string(),
            status: None,
            body: err.to_string(),
        }
    }

    /// Builds a `MalformedResponse` for the given endpoint
    pub fn malformed(endpoint: &str, reason: impl Into<String>) -> Self {
        AppError::MalformedResponse {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }

    /// HTTP status carried by a `RequestFailed` error
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// Name of the endpoint the error originated from, when known
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            AppError::RequestFailed { endpoint, .. }
            | AppError::MalformedResponse { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }

    /// Message reported by the API in the error body
    ///
    /// The brokerage API reports failures as `{"Error": "...", "Message": "..."}`.
    /// This returns `Message`, falling back to `Error`, when the body of a
    /// `RequestFailed` error has that shape.
    #[must_use]
    pub fn upstream_message(&self) -> Option<String> {
        let AppError::RequestFailed { body, .. } = self else {
            return None;
        };
        let value: Value = serde_json::from_str(body).ok()?;
        value
            .get("Message")
            .or_else(|| value.get("Error"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Returns true for 401 responses
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}
