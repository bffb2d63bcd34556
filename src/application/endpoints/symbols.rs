//! Symbol lookup endpoints

use crate::model::endpoint::{ApiDomain, Endpoint, HttpVerb, QueryParam};

/// Searches symbols matching a criteria expression
pub static SEARCH_SYMBOLS: Endpoint = Endpoint {
    name: "search_symbols",
    verb: HttpVerb::Get,
    domain: ApiDomain::Symbols,
    path: "search/{}",
    unwrap: None,
    required: &[],
    streaming: false,
    query: &[],
};

/// Suggests symbols for a partial text
pub static SUGGEST_SYMBOLS: Endpoint = Endpoint {
    name: "suggest_symbols",
    verb: HttpVerb::Get,
    domain: ApiDomain::Symbols,
    path: "suggest/{}",
    unwrap: None,
    required: &[],
    streaming: false,
    query: &[QueryParam::optional("$top"), QueryParam::optional("$filter")],
};

/// Every symbol endpoint
pub static ALL: &[&Endpoint] = &[&SEARCH_SYMBOLS, &SUGGEST_SYMBOLS];
