//! Order execution endpoints

use crate::model::endpoint::{ApiDomain, Endpoint, HttpVerb};

const fn endpoint(
    name: &'static str,
    verb: HttpVerb,
    path: &'static str,
    unwrap: Option<&'static str>,
) -> Endpoint {
    Endpoint {
        name,
        verb,
        domain: ApiDomain::OrderExecution,
        path,
        unwrap,
        required: &[],
        streaming: false,
        query: &[],
    }
}

/// Estimates cost and commission of an order without placing it
pub static CONFIRM_ORDER: Endpoint = endpoint(
    "confirm_order",
    HttpVerb::Post,
    "orderconfirm",
    Some("Confirmations"),
);

/// Estimates an order group without placing it
pub static CONFIRM_GROUP_ORDER: Endpoint = endpoint(
    "confirm_group_order",
    HttpVerb::Post,
    "ordergroupconfirm",
    Some("Confirmations"),
);

/// Places an order
pub static PLACE_ORDER: Endpoint =
    endpoint("place_order", HttpVerb::Post, "orders", Some("Orders"));

/// Places an order group (OCO, bracket)
pub static PLACE_GROUP_ORDER: Endpoint = endpoint(
    "place_group_order",
    HttpVerb::Post,
    "ordergroups",
    Some("Orders"),
);

/// Replaces an open order
pub static REPLACE_ORDER: Endpoint =
    endpoint("replace_order", HttpVerb::Put, "orders/{}", None);

/// Cancels an open order
pub static CANCEL_ORDER: Endpoint =
    endpoint("cancel_order", HttpVerb::Delete, "orders/{}", None);

/// Activation triggers usable in advanced orders
pub static GET_ACTIVATION_TRIGGERS: Endpoint = endpoint(
    "get_activation_triggers",
    HttpVerb::Get,
    "activationtriggers",
    Some("ActivationTriggers"),
);

/// Routes usable when placing orders
pub static GET_ROUTES: Endpoint = endpoint("get_routes", HttpVerb::Get, "routes", Some("Routes"));

/// Every order execution endpoint
pub static ALL: &[&Endpoint] = &[
    &CONFIRM_ORDER,
    &CONFIRM_GROUP_ORDER,
    &PLACE_ORDER,
    &PLACE_GROUP_ORDER,
    &REPLACE_ORDER,
    &CANCEL_ORDER,
    &GET_ACTIVATION_TRIGGERS,
    &GET_ROUTES,
];
