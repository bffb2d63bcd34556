/// Brokerage account interface
pub mod account;
/// Market data interface
pub mod market_data;
/// Order execution interface
pub mod order;
/// Symbol lookup interface
pub mod symbol;
