//! Brokerage endpoints: accounts, balances, positions, order listings and
//! their streaming counterparts.

use crate::constants::DEFAULT_ORDERS_PAGE_SIZE;
use crate::model::endpoint::{ApiDomain, Endpoint, HttpVerb, QueryParam};

const fn get(name: &'static str, path: &'static str, unwrap: &'static str) -> Endpoint {
    Endpoint {
        name,
        verb: HttpVerb::Get,
        domain: ApiDomain::Brokerage,
        path,
        unwrap: Some(unwrap),
        required: &[],
        streaming: false,
        query: &[],
    }
}

const fn stream(name: &'static str, path: &'static str) -> Endpoint {
    Endpoint {
        name,
        verb: HttpVerb::Get,
        domain: ApiDomain::Brokerage,
        path,
        unwrap: None,
        required: &[],
        streaming: true,
        query: &[],
    }
}

/// Lists the accounts of the authenticated user
pub static GET_ACCOUNTS: Endpoint = get("get_accounts", "accounts", "Accounts");

/// Real-time balances for a comma separated list of accounts
pub static GET_BALANCES: Endpoint = get("get_balances", "accounts/{}/balances", "Balances");

/// Beginning-of-day balances
pub static GET_BALANCES_BOD: Endpoint =
    get("get_balances_bod", "accounts/{}/bodbalances", "BODBalances");

/// Historical (closed) orders since a date
pub static GET_HISTORICAL_ORDERS: Endpoint = Endpoint {
    query: &[
        QueryParam::optional("since"),
        QueryParam::with_default("pageSize", DEFAULT_ORDERS_PAGE_SIZE),
        QueryParam::optional("nextToken"),
    ],
    ..get(
        "get_historical_orders",
        "accounts/{}/historicalorders",
        "Orders",
    )
};

/// Historical orders filtered by order id
pub static GET_HISTORICAL_ORDERS_BY_ORDER_ID: Endpoint = Endpoint {
    query: &[QueryParam::optional("since")],
    ..get(
        "get_historical_orders_by_order_id",
        "accounts/{}/historicalorders/{}",
        "Orders",
    )
};

/// Today's orders and open orders
pub static GET_ORDERS: Endpoint = Endpoint {
    query: &[
        QueryParam::with_default("pageSize", DEFAULT_ORDERS_PAGE_SIZE),
        QueryParam::optional("nextToken"),
    ],
    ..get("get_orders", "accounts/{}/orders", "Orders")
};

/// Orders filtered by order id
pub static GET_ORDERS_BY_ORDER_ID: Endpoint =
    get("get_orders_by_order_id", "accounts/{}/orders/{}", "Orders");

/// Open positions, optionally filtered by symbol
pub static GET_POSITIONS: Endpoint = Endpoint {
    query: &[QueryParam::optional("symbol")],
    ..get("get_positions", "accounts/{}/positions", "Positions")
};

/// Crypto wallets of an account
pub static GET_WALLETS: Endpoint = get("get_wallets", "accounts/{}/wallets", "Wallets");

/// Streams wallet updates
pub static STREAM_WALLETS: Endpoint = stream("stream_wallets", "stream/accounts/{}/wallets");

/// Streams order updates
pub static STREAM_ORDERS: Endpoint = stream("stream_orders", "stream/accounts/{}/orders");

/// Streams updates of specific orders
pub static STREAM_ORDERS_BY_ORDER_ID: Endpoint = stream(
    "stream_orders_by_order_id",
    "stream/accounts/{}/orders/{}",
);

/// Streams position updates
pub static STREAM_POSITIONS: Endpoint = Endpoint {
    query: &[QueryParam::optional("changes")],
    ..stream("stream_positions", "stream/accounts/{}/positions")
};

/// Every brokerage endpoint
pub static ALL: &[&Endpoint] = &[
    &GET_ACCOUNTS,
    &GET_BALANCES,
    &GET_BALANCES_BOD,
    &GET_HISTORICAL_ORDERS,
    &GET_HISTORICAL_ORDERS_BY_ORDER_ID,
    &GET_ORDERS,
    &GET_ORDERS_BY_ORDER_ID,
    &GET_POSITIONS,
    &GET_WALLETS,
    &STREAM_WALLETS,
    &STREAM_ORDERS,
    &STREAM_ORDERS_BY_ORDER_ID,
    &STREAM_POSITIONS,
];
