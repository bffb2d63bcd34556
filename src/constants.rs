/// Root URL of the live brokerage API
pub const LIVE_API_BASE_URL: &str = "https://api.tradestation.com";
/// Root URL of the simulated trading API
pub const SIM_API_BASE_URL: &str = "https://sim-api.tradestation.com";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "ts-client/0.1.0";
/// Default timeout in seconds for non-streaming REST requests
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;
/// Largest single streamed record accepted before the stream is aborted (1 MiB)
pub const DEFAULT_MAX_RECORD_BYTES: usize = 1024 * 1024;
/// Accept header value for JSON endpoints
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Accept header value for streaming endpoints
pub const STREAM_CONTENT_TYPE: &str = "application/vnd.tradestation.streams.v2+json";

/// Default bar interval
pub const DEFAULT_BAR_INTERVAL: &str = "1";
/// Default bar unit
pub const DEFAULT_BAR_UNIT: &str = "Daily";
/// Default page size for order listings
pub const DEFAULT_ORDERS_PAGE_SIZE: &str = "600";
/// Default number of market depth levels
pub const DEFAULT_MAX_LEVELS: &str = "20";
/// Default option strike interval
pub const DEFAULT_STRIKE_INTERVAL: &str = "1";
/// Default for greeks computation on option streams
pub const DEFAULT_ENABLE_GREEKS: &str = "true";
/// Default option strike range
pub const DEFAULT_STRIKE_RANGE: &str = "All";
/// Default option type filter
pub const DEFAULT_OPTION_TYPE: &str = "All";
/// Default option spread type
pub const DEFAULT_SPREAD_TYPE: &str = "Single";
