/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Prelude
//!
//! Imports the types and traits needed for most interactions with the API.
//!
//! ```rust
//! use ts_client::prelude::*;
//!
//! let config = Config::with_token(SIM_API_BASE_URL, "token");
//! let client = Client::new(&config);
//! assert!(client.is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the client
pub use crate::application::config::{Config, Credentials, RestApiConfig, StreamConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT, SESSION AND SERVICES
// ============================================================================

/// Client implementing every service
pub use crate::application::client::Client;

/// Session holding the bearer token
pub use crate::application::session::Session;

/// Service traits
pub use crate::application::interfaces::{
    account::AccountService, market_data::MarketDataService, order::OrderService,
    symbol::SymbolService,
};

/// Request observers
pub use crate::application::observer::{RequestObserver, TracingObserver};

// ============================================================================
// DISPATCH AND TRANSPORT
// ============================================================================

/// Endpoint descriptors and dispatcher
pub use crate::model::endpoint::{ApiDomain, Endpoint, HttpVerb, ParamDefault, QueryParam};
pub use crate::model::http::Dispatcher;
pub use crate::model::query::QueryArgs;

/// HTTP transport
pub use crate::transport::http_client::{
    HttpTransport, PreparedRequest, ReqwestTransport, TransportResponse,
};

// ============================================================================
// MODELS
// ============================================================================

/// Request models and query builders
pub use crate::model::requests::{
    BarsRequest, GroupOrderRequest, OptionChainRequest, OptionQuoteLeg, OptionQuotesRequest,
    OptionRiskRewardRequest, OptionStrikesRequest, OrderLeg, OrderRequest, ReplaceOrderRequest,
    RiskRewardLeg, TimeInForce,
};

/// Order enums
pub use crate::presentation::order::{
    BarUnit, Duration, GroupType, OrderType, SpreadType, TradeAction,
};

/// Streams
pub use crate::model::stream::{RecordStream, StreamEvent};

// ============================================================================
// UTILITIES AND CONSTANTS
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use futures_util::StreamExt;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
