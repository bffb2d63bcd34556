//! Endpoint registry
//!
//! One static descriptor per API call, grouped by domain. Query defaults live
//! here and nowhere else.

/// Accounts, balances, positions and order listings
pub mod brokerage;
/// Bars, quotes, depth, options and symbol details
pub mod market_data;
/// Order placement and management
pub mod order_execution;
/// Symbol search and suggestion
pub mod symbols;

use crate::model::endpoint::Endpoint;

/// Iterates over every registered endpoint
pub fn all() -> impl Iterator<Item = &'static Endpoint> {
    brokerage::ALL
        .iter()
        .chain(market_data::ALL)
        .chain(order_execution::ALL)
        .chain(symbols::ALL)
        .copied()
}

/// Finds an endpoint by name
#[must_use]
pub fn by_name(name: &str) -> Option<&'static Endpoint> {
    all().find(|endpoint| endpoint.name == name)
}
