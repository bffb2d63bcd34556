/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Trade action of an order
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeAction {
    /// Buy equities or futures
    #[default]
    Buy,
    /// Sell equities or futures
    Sell,
    /// Close a short equity position
    #[serde(rename = "BUYTOCOVER")]
    BuyToCover,
    /// Open a short equity position
    #[serde(rename = "SELLSHORT")]
    SellShort,
    /// Open a long option position
    #[serde(rename = "BUYTOOPEN")]
    BuyToOpen,
    /// Close a short option position
    #[serde(rename = "BUYTOCLOSE")]
    BuyToClose,
    /// Open a short option position
    #[serde(rename = "SELLTOOPEN")]
    SellToOpen,
    /// Close a long option position
    #[serde(rename = "SELLTOCLOSE")]
    SellToClose,
}

/// Order type
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderType {
    /// Executed immediately at the current market price
    #[default]
    Market,
    /// Executed at the limit price or better
    Limit,
    /// Becomes a market order when the stop price is reached
    StopMarket,
    /// Becomes a limit order when the stop price is reached
    StopLimit,
}

/// How long an order stays working
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Duration {
    /// Valid until the end of the regular session
    #[default]
    Day,
    /// Day, including extended hours
    Dyp,
    /// Good till cancelled
    Gtc,
    /// Good till cancelled, including extended hours
    Gcp,
    /// Good till date
    Gtd,
    /// Good till date, including extended hours
    Gdp,
    /// Fill or kill
    Fok,
    /// Immediate or cancel
    Ioc,
    /// At the opening
    Opg,
    /// On close
    Cls,
}

/// Order group type
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupType {
    /// Independent orders sent together
    #[default]
    Normal,
    /// Bracket: an entry order with profit target and stop
    Brk,
    /// One cancels the others
    Oco,
}

/// Option spread type used by strike and chain queries
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SpreadType {
    /// Single leg
    #[default]
    Single,
    /// Vertical spread
    Vertical,
    /// Calendar spread
    Calendar,
    /// Butterfly
    Butterfly,
    /// Condor
    Condor,
    /// Straddle
    Straddle,
    /// Strangle
    Strangle,
    /// Diagonal spread
    Diagonal,
    /// Collar
    Collar,
    /// Iron butterfly
    IronButterfly,
    /// Iron condor
    IronCondor,
}

impl SpreadType {
    /// Wire value of the spread type
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SpreadType::Single => "Single",
            SpreadType::Vertical => "Vertical",
            SpreadType::Calendar => "Calendar",
            SpreadType::Butterfly => "Butterfly",
            SpreadType::Condor => "Condor",
            SpreadType::Straddle => "Straddle",
            SpreadType::Strangle => "Strangle",
            SpreadType::Diagonal => "Diagonal",
            SpreadType::Collar => "Collar",
            SpreadType::IronButterfly => "IronButterfly",
            SpreadType::IronCondor => "IronCondor",
        }
    }
}

/// Unit of a bar interval
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BarUnit {
    /// Minute bars
    Minute,
    /// Daily bars
    #[default]
    Daily,
    /// Weekly bars
    Weekly,
    /// Monthly bars
    Monthly,
}

impl BarUnit {
    /// Wire value of the unit
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BarUnit::Minute => "Minute",
            BarUnit::Daily => "Daily",
            BarUnit::Weekly => "Weekly",
            BarUnit::Monthly => "Monthly",
        }
    }
}
