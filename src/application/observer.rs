/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Caller-injected request diagnostics
//!
//! The dispatcher reports what it does to an optional [`RequestObserver`].
//! Observers only watch: errors are returned to the caller whatever the
//! observer does with them.

use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use reqwest::{StatusCode, Url};
use tracing::{error, info, warn};

/// Hook notified by the dispatcher around each request
pub trait RequestObserver: Send + Sync {
    /// Called once the request is built, before it is sent
    fn on_request(&self, _endpoint: &Endpoint, _url: &Url) {}

    /// Called with the status of every response received
    fn on_response(&self, _endpoint: &Endpoint, _status: StatusCode) {}

    /// Called with every error before it is returned to the caller
    fn on_error(&self, _endpoint: &Endpoint, _error: &AppError) {}
}

/// Observer forwarding diagnostics to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, endpoint: &Endpoint, url: &Url) {
        info!("{} {} {}", endpoint.verb.method(), endpoint.name, url.path());
    }

    fn on_response(&self, endpoint: &Endpoint, status: StatusCode) {
        if !status.is_success() {
            warn!("{} answered {}", endpoint.name, status);
        }
    }

    fn on_error(&self, endpoint: &Endpoint, err: &AppError) {
        error!("{} failed: {}", endpoint.name, err);
    }
}
