//! Market data endpoints: bars, quotes, market depth, options and symbol
//! details.

use crate::constants::{
    DEFAULT_BAR_INTERVAL, DEFAULT_BAR_UNIT, DEFAULT_ENABLE_GREEKS, DEFAULT_MAX_LEVELS,
    DEFAULT_OPTION_TYPE, DEFAULT_SPREAD_TYPE, DEFAULT_STRIKE_INTERVAL, DEFAULT_STRIKE_RANGE,
};
use crate::model::endpoint::{ApiDomain, Endpoint, HttpVerb, QueryParam};

const fn get(name: &'static str, path: &'static str, unwrap: Option<&'static str>) -> Endpoint {
    Endpoint {
        name,
        verb: HttpVerb::Get,
        domain: ApiDomain::MarketData,
        path,
        unwrap,
        required: &[],
        streaming: false,
        query: &[],
    }
}

const fn stream(name: &'static str, path: &'static str) -> Endpoint {
    Endpoint {
        name,
        verb: HttpVerb::Get,
        domain: ApiDomain::MarketData,
        path,
        unwrap: None,
        required: &[],
        streaming: true,
        query: &[],
    }
}

/// Historical bars
///
/// `lastdate` defaults to the time the request is built, so a call without
/// explicit dates returns bars ending now.
pub static GET_BARS: Endpoint = Endpoint {
    query: &[
        QueryParam::with_default("interval", DEFAULT_BAR_INTERVAL),
        QueryParam::with_default("unit", DEFAULT_BAR_UNIT),
        QueryParam::optional("barsback"),
        QueryParam::optional("firstdate"),
        QueryParam::defaults_to_now("lastdate"),
        QueryParam::optional("sessiontemplate"),
    ],
    ..get("get_bars", "barcharts/{}", Some("Bars"))
};

/// Names of the tradable crypto pairs
pub static GET_CRYPTO_SYMBOL_NAMES: Endpoint = get(
    "get_crypto_symbol_names",
    "symbollists/cryptopairs/symbolnames",
    Some("SymbolNames"),
);

/// Symbol details; the body carries both `Symbols` and `Errors`
pub static GET_SYMBOL_DETAILS: Endpoint = get("get_symbol_details", "symbols/{}", None);

/// Option expirations for an underlying
pub static GET_OPTION_EXPIRATIONS: Endpoint = Endpoint {
    query: &[QueryParam::optional("strikePrice")],
    ..get(
        "get_option_expirations",
        "options/expirations/{}",
        Some("Expirations"),
    )
};

/// Risk/reward analysis of an option spread
pub static GET_OPTION_RISK_REWARD: Endpoint = Endpoint {
    verb: HttpVerb::Post,
    ..get("get_option_risk_reward", "options/riskreward", None)
};

/// Supported option spread types
pub static GET_OPTION_SPREAD_TYPES: Endpoint = get(
    "get_option_spread_types",
    "options/spreadtypes",
    Some("SpreadTypes"),
);

/// Option strikes; the body is `{SpreadType, Strikes}`
pub static GET_OPTION_STRIKES: Endpoint = Endpoint {
    query: &[
        QueryParam::with_default("spreadType", DEFAULT_SPREAD_TYPE),
        QueryParam::with_default("strikeInterval", DEFAULT_STRIKE_INTERVAL),
        QueryParam::optional("expiration"),
        QueryParam::optional("expiration2"),
    ],
    required: &["SpreadType", "Strikes"],
    ..get("get_option_strikes", "options/strikes/{}", None)
};

/// Quote snapshots for a comma separated list of symbols
pub static GET_QUOTE_SNAPSHOTS: Endpoint =
    get("get_quote_snapshots", "quotes/{}", Some("Quotes"));

/// Streams bars
pub static STREAM_BARS: Endpoint = Endpoint {
    query: &[
        QueryParam::with_default("interval", DEFAULT_BAR_INTERVAL),
        QueryParam::with_default("unit", DEFAULT_BAR_UNIT),
        QueryParam::optional("barsback"),
        QueryParam::optional("sessiontemplate"),
    ],
    ..stream("stream_bars", "stream/barcharts/{}")
};

/// Streams market depth quotes
pub static STREAM_MARKET_DEPTH_QUOTES: Endpoint = Endpoint {
    query: &[QueryParam::with_default("maxlevels", DEFAULT_MAX_LEVELS)],
    ..stream(
        "stream_market_depth_quotes",
        "stream/marketdepth/quotes/{}",
    )
};

/// Streams aggregated market depth
pub static STREAM_MARKET_DEPTH_AGGREGATES: Endpoint = Endpoint {
    query: &[QueryParam::with_default("maxlevels", DEFAULT_MAX_LEVELS)],
    ..stream(
        "stream_market_depth_aggregates",
        "stream/marketdepth/aggregates/{}",
    )
};

/// Streams an option chain
pub static STREAM_OPTION_CHAIN: Endpoint = Endpoint {
    query: &[
        QueryParam::optional("expiration"),
        QueryParam::optional("expiration2"),
        QueryParam::optional("strikeProximity"),
        QueryParam::with_default("spreadType", DEFAULT_SPREAD_TYPE),
        QueryParam::optional("riskFreeRate"),
        QueryParam::optional("priceCenter"),
        QueryParam::with_default("strikeInterval", DEFAULT_STRIKE_INTERVAL),
        QueryParam::with_default("enableGreeks", DEFAULT_ENABLE_GREEKS),
        QueryParam::with_default("strikeRange", DEFAULT_STRIKE_RANGE),
        QueryParam::with_default("optionType", DEFAULT_OPTION_TYPE),
    ],
    ..stream("stream_option_chain", "stream/options/chains/{}")
};

/// Streams quotes for option legs (`legs[i].Symbol`, `legs[i].Ratio`)
pub static STREAM_OPTION_QUOTES: Endpoint = Endpoint {
    query: &[
        QueryParam::indexed("legs", &["Symbol", "Ratio"]),
        QueryParam::optional("riskFreeRate"),
        QueryParam::with_default("enableGreeks", DEFAULT_ENABLE_GREEKS),
    ],
    ..stream("stream_option_quotes", "stream/options/quotes")
};

/// Streams quotes
pub static STREAM_QUOTES: Endpoint = stream("stream_quotes", "stream/quotes/{}");

/// Every market data endpoint
pub static ALL: &[&Endpoint] = &[
    &GET_BARS,
    &GET_CRYPTO_SYMBOL_NAMES,
    &GET_SYMBOL_DETAILS,
    &GET_OPTION_EXPIRATIONS,
    &GET_OPTION_RISK_REWARD,
    &GET_OPTION_SPREAD_TYPES,
    &GET_OPTION_STRIKES,
    &GET_QUOTE_SNAPSHOTS,
    &STREAM_BARS,
    &STREAM_MARKET_DEPTH_QUOTES,
    &STREAM_MARKET_DEPTH_AGGREGATES,
    &STREAM_OPTION_CHAIN,
    &STREAM_OPTION_QUOTES,
    &STREAM_QUOTES,
];
