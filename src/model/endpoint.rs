/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Static endpoint descriptors
//!
//! Every API call the client can make is described by one [`Endpoint`]. The
//! descriptors are `'static` values defined in the per-domain tables under
//! `application::endpoints` and evaluated by the dispatcher.

use chrono::{SecondsFormat, Utc};
use reqwest::Method;
use serde::Serialize;

/// HTTP verb used by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    /// GET request
    Get,
    /// POST request with a JSON body
    Post,
    /// PUT request with a JSON body
    Put,
    /// DELETE request
    Delete,
}

impl HttpVerb {
    /// Converts the verb into the `reqwest` method
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            HttpVerb::Get => Method::GET,
            HttpVerb::Post => Method::POST,
            HttpVerb::Put => Method::PUT,
            HttpVerb::Delete => Method::DELETE,
        }
    }
}

/// API area an endpoint belongs to, each with its own base path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ApiDomain {
    /// Accounts, balances, positions and order listings
    Brokerage,
    /// Bars, quotes, options and symbol details
    MarketData,
    /// Order placement, confirmation and cancellation
    OrderExecution,
    /// Symbol search and suggestion
    Symbols,
}

impl ApiDomain {
    /// Base path of the domain, relative to the API root
    #[must_use]
    pub fn base_path(self) -> &'static str {
        match self {
            ApiDomain::Brokerage => "v3/brokerage",
            ApiDomain::MarketData => "v3/marketdata",
            ApiDomain::OrderExecution => "v3/orderexecution",
            ApiDomain::Symbols => "v2/data/symbols",
        }
    }
}

/// Value used for a query parameter the caller left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDefault {
    /// Parameter is omitted from the query string
    Omit,
    /// Parameter is sent with a fixed value
    Value(&'static str),
    /// Parameter is sent with the current UTC time in ISO-8601 form,
    /// evaluated when the request is built
    Now,
}

impl ParamDefault {
    /// Resolves the default into the value to send, if any
    #[must_use]
    pub fn resolve(self) -> Option<String> {
        match self {
            ParamDefault::Omit => None,
            ParamDefault::Value(value) => Some(value.to_string()),
            ParamDefault::Now => Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

/// A query parameter accepted by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam {
    /// Name as sent on the wire
    pub name: &'static str,
    /// What to send when the caller does not supply the parameter
    pub default: ParamDefault,
    /// When set, `name` is the family prefix and caller parameters of the form
    /// `name[<index>].<member>` are accepted (e.g. `legs[0].Symbol`)
    pub indexed: bool,
    /// Member names allowed after the index of an indexed family
    pub members: &'static [&'static str],
}

impl QueryParam {
    /// Optional parameter with no default
    #[must_use]
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            default: ParamDefault::Omit,
            indexed: false,
            members: &[],
        }
    }

    /// Parameter sent with `value` unless the caller overrides it
    #[must_use]
    pub const fn with_default(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            default: ParamDefault::Value(value),
            indexed: false,
            members: &[],
        }
    }

    /// Parameter defaulting to the current time
    #[must_use]
    pub const fn defaults_to_now(name: &'static str) -> Self {
        Self {
            name,
            default: ParamDefault::Now,
            indexed: false,
            members: &[],
        }
    }

    /// Family of indexed parameters `prefix[<index>].<member>`
    #[must_use]
    pub const fn indexed(prefix: &'static str, members: &'static [&'static str]) -> Self {
        Self {
            name: prefix,
            default: ParamDefault::Omit,
            indexed: true,
            members,
        }
    }

    /// Returns true if a caller-supplied parameter name belongs to this declaration
    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        if !self.indexed {
            return name == self.name;
        }
        let Some(rest) = name
            .strip_prefix(self.name)
            .and_then(|rest| rest.strip_prefix('['))
        else {
            return false;
        };
        let Some((index, member)) = rest.split_once("].") else {
            return false;
        };
        !index.is_empty()
            && index.bytes().all(|b| b.is_ascii_digit())
            && self.members.iter().any(|m| *m == member)
    }
}

/// Static description of one API endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Name used in logs and errors
    pub name: &'static str,
    /// HTTP verb
    pub verb: HttpVerb,
    /// Domain whose base path prefixes `path`
    pub domain: ApiDomain,
    /// Path relative to the domain base, with `{}` placeholders for path arguments
    pub path: &'static str,
    /// Top-level field returned to the caller; `None` returns the whole body
    pub unwrap: Option<&'static str>,
    /// Fields a whole-body response must carry; only these are returned.
    /// Ignored when `unwrap` is set.
    pub required: &'static [&'static str],
    /// Whether the endpoint holds the connection open and streams records
    pub streaming: bool,
    /// Declared query parameters, in the order they are sent
    pub query: &'static [QueryParam],
}

impl Endpoint {
    /// Number of `{}` placeholders in the path template
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.path
            .split('/')
            .filter(|segment| *segment == "{}")
            .count()
    }

    /// Looks up the declaration accepting the given query parameter name
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&QueryParam> {
        self.query.iter().find(|param| param.accepts(name))
    }
}
