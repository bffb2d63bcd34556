/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::query::QueryArgs;
use crate::presentation::order::{BarUnit, Duration, GroupType, OrderType, SpreadType, TradeAction};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Parameters for bar chart requests
///
/// Only the symbol is required. Missing values fall back to the endpoint
/// defaults: interval `1`, unit `Daily` and, for historical bars, `lastdate`
/// set to the time the request is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarsRequest<'a> {
    /// Symbol
    pub symbol: &'a str,
    /// Number of units per bar
    pub interval: Option<u32>,
    /// Bar unit
    pub unit: Option<BarUnit>,
    /// Number of bars back from `lastdate`
    pub barsback: Option<u32>,
    /// First date of the range (ISO-8601)
    pub firstdate: Option<&'a str>,
    /// Last date of the range (ISO-8601)
    pub lastdate: Option<&'a str>,
    /// Session template, e.g. `USEQPreAndPost`
    pub sessiontemplate: Option<&'a str>,
}

impl<'a> BarsRequest<'a> {
    /// Create new parameters with just the symbol
    pub fn new(symbol: &'a str) -> Self {
        Self {
            symbol,
            ..Default::default()
        }
    }

    /// Set the interval
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Set the unit
    pub fn with_unit(mut self, unit: BarUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Set the number of bars back
    pub fn with_barsback(mut self, barsback: u32) -> Self {
        self.barsback = Some(barsback);
        self
    }

    /// Set the first date
    pub fn with_firstdate(mut self, firstdate: &'a str) -> Self {
        self.firstdate = Some(firstdate);
        self
    }

    /// Set the last date
    pub fn with_lastdate(mut self, lastdate: &'a str) -> Self {
        self.lastdate = Some(lastdate);
        self
    }

    /// Set the session template
    pub fn with_sessiontemplate(mut self, sessiontemplate: &'a str) -> Self {
        self.sessiontemplate = Some(sessiontemplate);
        self
    }

    /// Query arguments for historical bars
    #[must_use]
    pub fn query(&self) -> QueryArgs {
        self.stream_query()
            .with_opt("firstdate", self.firstdate)
            .with_opt("lastdate", self.lastdate)
    }

    /// Query arguments for streamed bars, which take no date range
    #[must_use]
    pub fn stream_query(&self) -> QueryArgs {
        QueryArgs::new()
            .with_opt("interval", self.interval)
            .with_opt("unit", self.unit.map(|unit| unit.as_str()))
            .with_opt("barsback", self.barsback)
            .with_opt("sessiontemplate", self.sessiontemplate)
    }
}

/// Parameters for option strike requests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionStrikesRequest<'a> {
    /// Underlying symbol
    pub underlying: &'a str,
    /// Spread type (default `Single`)
    pub spread_type: Option<SpreadType>,
    /// Strike interval (default `1`)
    pub strike_interval: Option<u32>,
    /// Expiration date
    pub expiration: Option<&'a str>,
    /// Second expiration date, for calendar and diagonal spreads
    pub expiration2: Option<&'a str>,
}

impl<'a> OptionStrikesRequest<'a> {
    /// Create new parameters with just the underlying
    pub fn new(underlying: &'a str) -> Self {
        Self {
            underlying,
            ..Default::default()
        }
    }

    /// Set the spread type
    pub fn with_spread_type(mut self, spread_type: SpreadType) -> Self {
        self.spread_type = Some(spread_type);
        self
    }

    /// Set the strike interval
    pub fn with_strike_interval(mut self, strike_interval: u32) -> Self {
        self.strike_interval = Some(strike_interval);
        self
    }

    /// Set the expiration dates
    pub fn with_expirations(mut self, expiration: &'a str, expiration2: Option<&'a str>) -> Self {
        self.expiration = Some(expiration);
        self.expiration2 = expiration2;
        self
    }

    /// Query arguments
    #[must_use]
    pub fn query(&self) -> QueryArgs {
        QueryArgs::new()
            .with_opt("spreadType", self.spread_type.map(|s| s.as_str()))
            .with_opt("strikeInterval", self.strike_interval)
            .with_opt("expiration", self.expiration)
            .with_opt("expiration2", self.expiration2)
    }
}

/// Parameters for the option chain stream
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionChainRequest<'a> {
    /// Underlying symbol
    pub underlying: &'a str,
    /// Expiration date
    pub expiration: Option<&'a str>,
    /// Second expiration date
    pub expiration2: Option<&'a str>,
    /// Number of strikes around the price center
    pub strike_proximity: Option<u32>,
    /// Spread type (default `Single`)
    pub spread_type: Option<SpreadType>,
    /// Risk free rate used for theoretical values
    pub risk_free_rate: Option<f64>,
    /// Price the strikes are centered on
    pub price_center: Option<f64>,
    /// Strike interval (default `1`)
    pub strike_interval: Option<u32>,
    /// Whether greeks are computed (default `true`)
    pub enable_greeks: Option<bool>,
    /// `All`, `ITM` or `OTM` (default `All`)
    pub strike_range: Option<&'a str>,
    /// `All`, `Call` or `Put` (default `All`)
    pub option_type: Option<&'a str>,
}

impl<'a> OptionChainRequest<'a> {
    /// Create new parameters with just the underlying
    pub fn new(underlying: &'a str) -> Self {
        Self {
            underlying,
            ..Default::default()
        }
    }

    /// Set the expiration
    pub fn with_expiration(mut self, expiration: &'a str) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Set the strike proximity
    pub fn with_strike_proximity(mut self, strike_proximity: u32) -> Self {
        self.strike_proximity = Some(strike_proximity);
        self
    }

    /// Set the spread type
    pub fn with_spread_type(mut self, spread_type: SpreadType) -> Self {
        self.spread_type = Some(spread_type);
        self
    }

    /// Enable or disable greeks
    pub fn with_greeks(mut self, enable_greeks: bool) -> Self {
        self.enable_greeks = Some(enable_greeks);
        self
    }

    /// Set the strike range
    pub fn with_strike_range(mut self, strike_range: &'a str) -> Self {
        self.strike_range = Some(strike_range);
        self
    }

    /// Set the option type
    pub fn with_option_type(mut self, option_type: &'a str) -> Self {
        self.option_type = Some(option_type);
        self
    }

    /// Query arguments
    #[must_use]
    pub fn query(&self) -> QueryArgs {
        QueryArgs::new()
            .with_opt("expiration", self.expiration)
            .with_opt("expiration2", self.expiration2)
            .with_opt("strikeProximity", self.strike_proximity)
            .with_opt("spreadType", self.spread_type.map(|s| s.as_str()))
            .with_opt("riskFreeRate", self.risk_free_rate)
            .with_opt("priceCenter", self.price_center)
            .with_opt("strikeInterval", self.strike_interval)
            .with_opt("enableGreeks", self.enable_greeks)
            .with_opt("strikeRange", self.strike_range)
            .with_opt("optionType", self.option_type)
    }
}

/// One leg of an option quote stream
#[derive(Debug, Clone, PartialEq)]
pub struct OptionQuoteLeg {
    /// Option symbol, e.g. `MSFT 261218C400`
    pub symbol: String,
    /// Ratio of the leg; negative for sold legs
    pub ratio: Option<i32>,
}

impl OptionQuoteLeg {
    /// Leg with the default ratio
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ratio: None,
        }
    }

    /// Set the ratio
    pub fn with_ratio(mut self, ratio: i32) -> Self {
        self.ratio = Some(ratio);
        self
    }
}

/// Parameters for the option quotes stream
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionQuotesRequest {
    /// Legs of the spread
    pub legs: Vec<OptionQuoteLeg>,
    /// Risk free rate used for theoretical values
    pub risk_free_rate: Option<f64>,
    /// Whether greeks are computed (default `true`)
    pub enable_greeks: Option<bool>,
}

impl OptionQuotesRequest {
    /// Create parameters for the given legs
    pub fn new(legs: Vec<OptionQuoteLeg>) -> Self {
        Self {
            legs,
            ..Default::default()
        }
    }

    /// Query arguments, legs encoded as `legs[i].Symbol` / `legs[i].Ratio`
    #[must_use]
    pub fn query(&self) -> QueryArgs {
        let args = self
            .legs
            .iter()
            .enumerate()
            .fold(QueryArgs::new(), |args, (i, leg)| {
                args.with(format!("legs[{i}].Symbol"), &leg.symbol)
                    .with_opt(format!("legs[{i}].Ratio"), leg.ratio)
            });
        args.with_opt("riskFreeRate", self.risk_free_rate)
            .with_opt("enableGreeks", self.enable_greeks)
    }
}

/// Time in force of an order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TimeInForce {
    /// Duration
    #[serde(rename = "Duration")]
    pub duration: Duration,
    /// Expiration for GTD orders
    #[serde(rename = "Expiration", skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
}

impl TimeInForce {
    /// Time in force with the given duration and no expiration
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            expiration: None,
        }
    }
}

/// Leg of a multi-leg option order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrderLeg {
    /// Option symbol
    #[serde(rename = "Symbol")]
    pub symbol: String,
    /// Quantity, as a decimal string
    #[serde(rename = "Quantity")]
    pub quantity: String,
    /// Trade action of the leg
    #[serde(rename = "TradeAction")]
    pub trade_action: TradeAction,
}

/// Model for placing or confirming an order
///
/// Sent verbatim; the client does not validate field combinations.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// Account the order is placed in
    #[serde(rename = "AccountID")]
    pub account_id: String,
    /// Symbol
    #[serde(rename = "Symbol")]
    pub symbol: String,
    /// Quantity, as a decimal string
    #[serde(rename = "Quantity")]
    pub quantity: String,
    /// Order type
    #[serde(rename = "OrderType")]
    pub order_type: OrderType,
    /// Trade action
    #[serde(rename = "TradeAction")]
    pub trade_action: TradeAction,
    /// Time in force
    #[serde(rename = "TimeInForce")]
    pub time_in_force: TimeInForce,
    /// Route, e.g. `Intelligent`
    #[serde(rename = "Route")]
    pub route: String,
    /// Limit price for limit and stop limit orders
    #[serde(rename = "LimitPrice", skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<String>,
    /// Stop price for stop orders
    #[serde(rename = "StopPrice", skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<String>,
    /// Client-generated id making placement idempotent
    #[serde(rename = "OrderConfirmID", skip_serializing_if = "Option::is_none")]
    pub order_confirm_id: Option<String>,
    /// Legs of a multi-leg option order
    #[serde(rename = "Legs", skip_serializing_if = "Option::is_none")]
    pub legs: Option<Vec<OrderLeg>>,
}

impl OrderRequest {
    /// Creates a day market order routed intelligently
    pub fn market(
        account_id: impl Into<String>,
        symbol: impl Into<String>,
        quantity: u32,
        trade_action: TradeAction,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            symbol: symbol.into(),
            quantity: quantity.to_string(),
            order_type: OrderType::Market,
            trade_action,
            time_in_force: TimeInForce::new(Duration::Day),
            route: "Intelligent".to_string(),
            limit_price: None,
            stop_price: None,
            order_confirm_id: None,
            legs: None,
        }
    }

    /// Creates a good-till-cancelled limit order routed intelligently
    pub fn limit(
        account_id: impl Into<String>,
        symbol: impl Into<String>,
        quantity: u32,
        trade_action: TradeAction,
        limit_price: f64,
    ) -> Self {
        Self {
            order_type: OrderType::Limit,
            time_in_force: TimeInForce::new(Duration::Gtc),
            limit_price: Some(limit_price.to_string()),
            ..Self::market(account_id, symbol, quantity, trade_action)
        }
    }

    /// Sets the time in force
    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = time_in_force;
        self
    }

    /// Sets the route
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    /// Sets the stop price
    pub fn with_stop_price(mut self, stop_price: f64) -> Self {
        self.stop_price = Some(stop_price.to_string());
        self
    }

    /// Sets the client order confirm id
    pub fn with_order_confirm_id(mut self, order_confirm_id: impl Into<String>) -> Self {
        self.order_confirm_id = Some(order_confirm_id.into());
        self
    }
}

/// Model for replacing an open order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ReplaceOrderRequest {
    /// New quantity
    #[serde(rename = "Quantity", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// New limit price
    #[serde(rename = "LimitPrice", skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<String>,
    /// New stop price
    #[serde(rename = "StopPrice", skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<String>,
    /// New order type, e.g. to convert to market
    #[serde(rename = "OrderType", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
}

/// Model for placing or confirming an order group
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct GroupOrderRequest {
    /// Group type
    #[serde(rename = "Type")]
    pub group_type: GroupType,
    /// Orders of the group
    #[serde(rename = "Orders")]
    pub orders: Vec<OrderRequest>,
}

impl GroupOrderRequest {
    /// One-cancels-other group
    pub fn oco(orders: Vec<OrderRequest>) -> Self {
        Self {
            group_type: GroupType::Oco,
            orders,
        }
    }

    /// Bracket group
    pub fn bracket(orders: Vec<OrderRequest>) -> Self {
        Self {
            group_type: GroupType::Brk,
            orders,
        }
    }
}

/// Leg of an option risk/reward analysis
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct RiskRewardLeg {
    /// Option symbol
    #[serde(rename = "Symbol")]
    pub symbol: String,
    /// Ratio of the leg
    #[serde(rename = "Ratio")]
    pub ratio: i32,
    /// Price the leg is opened at
    #[serde(rename = "OpenPrice", skip_serializing_if = "Option::is_none")]
    pub open_price: Option<String>,
    /// Target price
    #[serde(rename = "TargetPrice", skip_serializing_if = "Option::is_none")]
    pub target_price: Option<String>,
    /// Stop price
    #[serde(rename = "StopPrice", skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<String>,
}

/// Model for the option risk/reward analysis
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OptionRiskRewardRequest {
    /// Price of the whole spread
    #[serde(rename = "SpreadPrice")]
    pub spread_price: String,
    /// Legs of the spread
    #[serde(rename = "Legs")]
    pub legs: Vec<RiskRewardLeg>,
}
