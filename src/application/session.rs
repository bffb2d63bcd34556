/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Session holding the bearer token and the API root

use crate::error::AppError;
use reqwest::Url;

/// Bearer token and API root used to sign and address requests
///
/// A session is never mutated in place. When the external auth flow refreshes
/// the token, a new session replaces the old one wholesale.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    base_url: Url,
    access_token: String,
}

impl Session {
    /// Creates a session for the given API root and access token
    ///
    /// # Arguments
    /// * `base_url` - API root, e.g. `https://api.tradestation.com`
    /// * `access_token` - OAuth access token obtained by the caller
    ///
    /// # Returns
    /// * `Err(AppError::Config)` if the URL is invalid or the token is empty
    pub fn new(base_url: &str, access_token: impl Into<String>) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("invalid base url '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "base url '{base_url}' cannot carry a path"
            )));
        }
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(AppError::Config("access token is empty".to_string()));
        }
        Ok(Self {
            base_url,
            access_token,
        })
    }

    /// API root
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Current access token
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Value of the `Authorization` header
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url.as_str())
            .field("access_token", &"<redacted>")
            .finish()
    }
}
