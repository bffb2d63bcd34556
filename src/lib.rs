//! # ts-client
//!
//! Client for the TradeStation brokerage REST API: accounts, order
//! execution, market data and symbol lookup.
//!
//! Every call goes through a single dispatcher driven by a static table of
//! endpoint descriptors. The dispatcher builds the URL, signs the request with
//! the session's bearer token and returns either the unwrapped JSON field or a
//! lazy stream of records for streaming endpoints.
//!
//! ```no_run
//! use ts_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let session = Session::new(SIM_API_BASE_URL, "access-token")?;
//! let client = Client::with_session(session)?;
//!
//! let positions = client.get_positions("123456", None).await?;
//! println!("{positions}");
//!
//! let mut quotes = client.stream_quotes("MSFT,AAPL").await?;
//! while let Some(record) = quotes.next().await {
//!     match StreamEvent::from(record?) {
//!         StreamEvent::Data(quote) => println!("{quote}"),
//!         StreamEvent::Heartbeat(_) => continue,
//!         _ => break,
//!     }
//! }
//! quotes.close();
//! # Ok(())
//! # }
//! ```
//!
//! The library never logs on its own behalf beyond `tracing` events; install
//! a subscriber (for example with [`utils::setup_logger`]) or pass a
//! [`application::observer::RequestObserver`] to see them.

/// Client, configuration, endpoint registry and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error type
pub mod error;
/// Descriptors, dispatcher, request models and streams
pub mod model;
/// Commonly used types
pub mod prelude;
/// Shared enums
pub mod presentation;
/// HTTP transport
pub mod transport;
/// Utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
