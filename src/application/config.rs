use crate::constants::{DEFAULT_MAX_RECORD_BYTES, DEFAULT_REST_TIMEOUT_SECS, LIVE_API_BASE_URL};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Credentials for the brokerage API
///
/// The token is obtained by an external OAuth flow; this client only carries it.
pub struct Credentials {
    /// OAuth access token, never serialized
    #[serde(skip_serializing, default)]
    pub access_token: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// API root URL; domain base paths are appended to it
    pub base_url: String,
    /// Timeout in seconds for non-streaming requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for streaming endpoints
pub struct StreamConfig {
    /// Largest single record accepted before a stream is aborted
    pub max_record_bytes: usize,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the client
pub struct Config {
    /// Credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Streaming configuration
    pub stream: StreamConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment and an optional `.env` file
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `TS_API_BASE_URL` | `https://api.tradestation.com` |
    /// | `TS_ACCESS_TOKEN` | none |
    /// | `TS_REST_TIMEOUT` | `30` |
    /// | `TS_STREAM_MAX_RECORD_BYTES` | `1048576` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let access_token: Option<String> = get_env_or_none("TS_ACCESS_TOKEN");
        if access_token.is_none() {
            warn!("TS_ACCESS_TOKEN not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { access_token },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("TS_API_BASE_URL", LIVE_API_BASE_URL.to_string()),
                timeout: get_env_or_default("TS_REST_TIMEOUT", DEFAULT_REST_TIMEOUT_SECS),
            },
            stream: StreamConfig {
                max_record_bytes: get_env_or_default(
                    "TS_STREAM_MAX_RECORD_BYTES",
                    DEFAULT_MAX_RECORD_BYTES,
                ),
            },
        }
    }

    /// Creates a configuration for the given root and token, other values default
    pub fn with_token(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                access_token: Some(access_token.into()),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_REST_TIMEOUT_SECS,
            },
            stream: StreamConfig {
                max_record_bytes: DEFAULT_MAX_RECORD_BYTES,
            },
        }
    }
}
