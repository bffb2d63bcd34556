use crate::error::AppError;
use crate::model::stream::RecordStream;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the brokerage account endpoints
///
/// Account, order and symbol lists are passed as a single comma separated
/// string, e.g. `"123456,789012"`.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the accounts of the authenticated user (`Accounts`)
    async fn get_accounts(&self) -> Result<Value, AppError>;

    /// Gets real-time balances (`Balances`)
    async fn get_balances(&self, account_ids: &str) -> Result<Value, AppError>;

    /// Gets beginning-of-day balances (`BODBalances`)
    async fn get_balances_bod(&self, account_ids: &str) -> Result<Value, AppError>;

    /// Gets historical orders since a date (`Orders`)
    ///
    /// # Arguments
    /// * `account_ids` - Comma separated account ids
    /// * `since` - Start date, e.g. `2026-10-01`
    /// * `page_size` - Page size (default 600)
    /// * `next_token` - Token returned by the previous page
    async fn get_historical_orders(
        &self,
        account_ids: &str,
        since: &str,
        page_size: Option<u32>,
        next_token: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Gets historical orders by order id (`Orders`)
    async fn get_historical_orders_by_order_id(
        &self,
        account_ids: &str,
        order_ids: &str,
        since: &str,
    ) -> Result<Value, AppError>;

    /// Gets today's and open orders (`Orders`)
    async fn get_orders(
        &self,
        account_ids: &str,
        page_size: Option<u32>,
        next_token: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Gets orders by order id (`Orders`)
    async fn get_orders_by_order_id(
        &self,
        account_ids: &str,
        order_ids: &str,
    ) -> Result<Value, AppError>;

    /// Gets open positions, optionally filtered by symbol (`Positions`)
    async fn get_positions(
        &self,
        account_ids: &str,
        symbol: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Gets crypto wallets (`Wallets`)
    async fn get_wallets(&self, account_id: &str) -> Result<Value, AppError>;

    /// Streams wallet updates
    async fn stream_wallets(&self, account_id: &str) -> Result<RecordStream, AppError>;

    /// Streams order updates
    async fn stream_orders(&self, account_ids: &str) -> Result<RecordStream, AppError>;

    /// Streams updates for specific orders
    async fn stream_orders_by_order_id(
        &self,
        account_ids: &str,
        order_ids: &str,
    ) -> Result<RecordStream, AppError>;

    /// Streams position updates; `changes` only sends changed fields
    async fn stream_positions(
        &self,
        account_ids: &str,
        changes: Option<bool>,
    ) -> Result<RecordStream, AppError>;
}
