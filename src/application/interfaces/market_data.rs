use crate::error::AppError;
use crate::model::requests::{
    BarsRequest, OptionChainRequest, OptionQuotesRequest, OptionRiskRewardRequest,
    OptionStrikesRequest,
};
use crate::model::stream::RecordStream;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the market data endpoints
#[async_trait]
pub trait MarketDataService: Send + Sync {
    /// Gets historical bars (`Bars`)
    ///
    /// When `lastdate` is not set it defaults to the time the request is
    /// built, in ISO-8601 UTC.
    async fn get_bars(&self, request: &BarsRequest<'_>) -> Result<Value, AppError>;

    /// Gets the crypto pair names (`SymbolNames`)
    async fn get_crypto_symbol_names(&self) -> Result<Value, AppError>;

    /// Gets symbol details; returns the whole body (`Symbols` and `Errors`)
    async fn get_symbol_details(&self, symbols: &str) -> Result<Value, AppError>;

    /// Gets option expirations (`Expirations`)
    async fn get_option_expirations(
        &self,
        underlying: &str,
        strike_price: Option<f64>,
    ) -> Result<Value, AppError>;

    /// Analyses risk and reward of an option spread (whole body)
    async fn get_option_risk_reward(
        &self,
        request: &OptionRiskRewardRequest,
    ) -> Result<Value, AppError>;

    /// Gets option spread types (`SpreadTypes`)
    async fn get_option_spread_types(&self) -> Result<Value, AppError>;

    /// Gets option strikes; returns `{SpreadType, Strikes}`
    async fn get_option_strikes(
        &self,
        request: &OptionStrikesRequest<'_>,
    ) -> Result<Value, AppError>;

    /// Gets quote snapshots (`Quotes`)
    async fn get_quote_snapshots(&self, symbols: &str) -> Result<Value, AppError>;

    /// Streams bars
    async fn stream_bars(&self, request: &BarsRequest<'_>) -> Result<RecordStream, AppError>;

    /// Streams market depth quotes (`maxlevels` default 20)
    async fn stream_market_depth_quotes(
        &self,
        symbol: &str,
        max_levels: Option<u32>,
    ) -> Result<RecordStream, AppError>;

    /// Streams aggregated market depth (`maxlevels` default 20)
    async fn stream_market_depth_aggregates(
        &self,
        symbol: &str,
        max_levels: Option<u32>,
    ) -> Result<RecordStream, AppError>;

    /// Streams an option chain
    async fn stream_option_chain(
        &self,
        request: &OptionChainRequest<'_>,
    ) -> Result<RecordStream, AppError>;

    /// Streams quotes for option legs
    async fn stream_option_quotes(
        &self,
        request: &OptionQuotesRequest,
    ) -> Result<RecordStream, AppError>;

    /// Streams quotes
    async fn stream_quotes(&self, symbols: &str) -> Result<RecordStream, AppError>;
}
