/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::endpoints::{brokerage, market_data, order_execution, symbols};
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::market_data::MarketDataService;
use crate::application::interfaces::order::OrderService;
use crate::application::interfaces::symbol::SymbolService;
use crate::application::observer::RequestObserver;
use crate::application::session::Session;
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::Dispatcher;
use crate::model::query::QueryArgs;
use crate::model::requests::{
    BarsRequest, OptionChainRequest, OptionQuotesRequest, OptionRiskRewardRequest,
    OptionStrikesRequest,
};
use crate::model::stream::RecordStream;
use crate::transport::http_client::{HttpTransport, ReqwestTransport};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the brokerage API
///
/// Implements every service interface on top of a single [`Dispatcher`].
/// The client never acquires or refreshes tokens itself: the caller supplies
/// a [`Session`] and swaps it with [`Client::replace_session`] after a refresh.
#[derive(Debug, Clone)]
pub struct Client {
    dispatcher: Dispatcher,
}

impl Client {
    /// Creates a client from configuration
    ///
    /// # Returns
    /// * `Err(AppError::Config)` if no access token is configured, the base
    ///   URL is invalid or the HTTP client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let token = config
            .credentials
            .access_token
            .clone()
            .ok_or_else(|| AppError::Config("TS_ACCESS_TOKEN is not set".to_string()))?;
        let session = Session::new(&config.rest_api.base_url, token)?;
        let transport = ReqwestTransport::new(config.rest_api.timeout)?;
        let client = Self::with_transport(Arc::new(transport), session)
            .with_max_record_bytes(config.stream.max_record_bytes);
        info!("Client created for {}", config.rest_api.base_url);
        Ok(client)
    }

    /// Creates a client using the default `reqwest` transport
    pub fn with_session(session: Session) -> Result<Self, AppError> {
        let transport = ReqwestTransport::new(crate::constants::DEFAULT_REST_TIMEOUT_SECS)?;
        Ok(Self::with_transport(Arc::new(transport), session))
    }

    /// Creates a client sending through a custom transport
    pub fn with_transport(transport: Arc<dyn HttpTransport>, session: Session) -> Self {
        Self {
            dispatcher: Dispatcher::new(transport, session),
        }
    }

    /// Installs an observer notified around each request
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.dispatcher = self.dispatcher.with_observer(observer);
        self
    }

    /// Sets the largest streamed record accepted
    #[must_use]
    pub fn with_max_record_bytes(mut self, max_record_bytes: usize) -> Self {
        self.dispatcher = self.dispatcher.with_max_record_bytes(max_record_bytes);
        self
    }

    /// Replaces the session, typically after the token was refreshed
    pub async fn replace_session(&self, session: Session) {
        self.dispatcher.replace_session(session).await;
    }

    /// Snapshot of the current session
    pub async fn session(&self) -> Session {
        self.dispatcher.session().await
    }

    /// Dispatcher shared by all services
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    async fn fetch(
        &self,
        endpoint: &'static Endpoint,
        path_args: &[&str],
        query: QueryArgs,
    ) -> Result<Value, AppError> {
        self.dispatcher
            .execute::<()>(endpoint, path_args, &query, None)
            .await
    }

    async fn send<B: Serialize + Sync + ?Sized>(
        &self,
        endpoint: &'static Endpoint,
        path_args: &[&str],
        body: &B,
    ) -> Result<Value, AppError> {
        self.dispatcher
            .execute(endpoint, path_args, &QueryArgs::new(), Some(body))
            .await
    }

    async fn open(
        &self,
        endpoint: &'static Endpoint,
        path_args: &[&str],
        query: QueryArgs,
    ) -> Result<RecordStream, AppError> {
        info!("Opening stream {}", endpoint.name);
        self.dispatcher
            .execute_stream(endpoint, path_args, &query)
            .await
    }
}

fn count(value: &Value) -> usize {
    value.as_array().map_or(0, Vec::len)
}

#[async_trait]
impl AccountService for Client {
    async fn get_accounts(&self) -> Result<Value, AppError> {
        info!("Getting accounts");
        let accounts = self.fetch(&brokerage::GET_ACCOUNTS, &[], QueryArgs::new()).await?;
        debug!("Accounts obtained: {}", count(&accounts));
        Ok(accounts)
    }

    async fn get_balances(&self, account_ids: &str) -> Result<Value, AppError> {
        info!("Getting balances for {}", account_ids);
        self.fetch(&brokerage::GET_BALANCES, &[account_ids], QueryArgs::new())
            .await
    }

    async fn get_balances_bod(&self, account_ids: &str) -> Result<Value, AppError> {
        info!("Getting beginning of day balances for {}", account_ids);
        self.fetch(&brokerage::GET_BALANCES_BOD, &[account_ids], QueryArgs::new())
            .await
    }

    async fn get_historical_orders(
        &self,
        account_ids: &str,
        since: &str,
        page_size: Option<u32>,
        next_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Getting historical orders for {} since {}", account_ids, since);
        let query = QueryArgs::new()
            .with("since", since)
            .with_opt("pageSize", page_size)
            .with_opt("nextToken", next_token);
        let orders = self
            .fetch(&brokerage::GET_HISTORICAL_ORDERS, &[account_ids], query)
            .await?;
        debug!("Historical orders obtained: {}", count(&orders));
        Ok(orders)
    }

    async fn get_historical_orders_by_order_id(
        &self,
        account_ids: &str,
        order_ids: &str,
        since: &str,
    ) -> Result<Value, AppError> {
        let query = QueryArgs::new().with("since", since);
        self.fetch(
            &brokerage::GET_HISTORICAL_ORDERS_BY_ORDER_ID,
            &[account_ids, order_ids],
            query,
        )
        .await
    }

    async fn get_orders(
        &self,
        account_ids: &str,
        page_size: Option<u32>,
        next_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Getting orders for {}", account_ids);
        let query = QueryArgs::new()
            .with_opt("pageSize", page_size)
            .with_opt("nextToken", next_token);
        let orders = self
            .fetch(&brokerage::GET_ORDERS, &[account_ids], query)
            .await?;
        debug!("Orders obtained: {}", count(&orders));
        Ok(orders)
    }

    async fn get_orders_by_order_id(
        &self,
        account_ids: &str,
        order_ids: &str,
    ) -> Result<Value, AppError> {
        self.fetch(
            &brokerage::GET_ORDERS_BY_ORDER_ID,
            &[account_ids, order_ids],
            QueryArgs::new(),
        )
        .await
    }

    async fn get_positions(
        &self,
        account_ids: &str,
        symbol: Option<&str>,
    ) -> Result<Value, AppError> {
        debug!("Getting open positions for {}", account_ids);
        let query = QueryArgs::new().with_opt("symbol", symbol);
        let positions = self
            .fetch(&brokerage::GET_POSITIONS, &[account_ids], query)
            .await?;
        debug!("Positions obtained: {} positions", count(&positions));
        Ok(positions)
    }

    async fn get_wallets(&self, account_id: &str) -> Result<Value, AppError> {
        self.fetch(&brokerage::GET_WALLETS, &[account_id], QueryArgs::new())
            .await
    }

    async fn stream_wallets(&self, account_id: &str) -> Result<RecordStream, AppError> {
        self.open(&brokerage::STREAM_WALLETS, &[account_id], QueryArgs::new())
            .await
    }

    async fn stream_orders(&self, account_ids: &str) -> Result<RecordStream, AppError> {
        self.open(&brokerage::STREAM_ORDERS, &[account_ids], QueryArgs::new())
            .await
    }

    async fn stream_orders_by_order_id(
        &self,
        account_ids: &str,
        order_ids: &str,
    ) -> Result<RecordStream, AppError> {
        self.open(
            &brokerage::STREAM_ORDERS_BY_ORDER_ID,
            &[account_ids, order_ids],
            QueryArgs::new(),
        )
        .await
    }

    async fn stream_positions(
        &self,
        account_ids: &str,
        changes: Option<bool>,
    ) -> Result<RecordStream, AppError> {
        let query = QueryArgs::new().with_opt("changes", changes);
        self.open(&brokerage::STREAM_POSITIONS, &[account_ids], query)
            .await
    }
}

#[async_trait]
impl OrderService for Client {
    async fn confirm_order<B: Serialize + Sync + ?Sized>(
        &self,
        order: &B,
    ) -> Result<Value, AppError> {
        info!("Confirming order");
        self.send(&order_execution::CONFIRM_ORDER, &[], order).await
    }

    async fn confirm_group_order<B: Serialize + Sync + ?Sized>(
        &self,
        group: &B,
    ) -> Result<Value, AppError> {
        info!("Confirming order group");
        self.send(&order_execution::CONFIRM_GROUP_ORDER, &[], group)
            .await
    }

    async fn place_order<B: Serialize + Sync + ?Sized>(
        &self,
        order: &B,
    ) -> Result<Value, AppError> {
        info!("Placing order");
        let orders = self.send(&order_execution::PLACE_ORDER, &[], order).await?;
        debug!("Order placed: {}", orders);
        Ok(orders)
    }

    async fn place_group_order<B: Serialize + Sync + ?Sized>(
        &self,
        group: &B,
    ) -> Result<Value, AppError> {
        info!("Placing order group");
        let orders = self
            .send(&order_execution::PLACE_GROUP_ORDER, &[], group)
            .await?;
        debug!("Order group placed: {} orders", count(&orders));
        Ok(orders)
    }

    async fn replace_order<B: Serialize + Sync + ?Sized>(
        &self,
        order_id: &str,
        replacement: &B,
    ) -> Result<Value, AppError> {
        info!("Replacing order {}", order_id);
        self.send(&order_execution::REPLACE_ORDER, &[order_id], replacement)
            .await
    }

    async fn cancel_order(&self, order_id: &str) -> Result<Value, AppError> {
        info!("Cancelling order {}", order_id);
        self.fetch(&order_execution::CANCEL_ORDER, &[order_id], QueryArgs::new())
            .await
    }

    async fn get_activation_triggers(&self) -> Result<Value, AppError> {
        self.fetch(
            &order_execution::GET_ACTIVATION_TRIGGERS,
            &[],
            QueryArgs::new(),
        )
        .await
    }

    async fn get_routes(&self) -> Result<Value, AppError> {
        self.fetch(&order_execution::GET_ROUTES, &[], QueryArgs::new())
            .await
    }
}

#[async_trait]
impl MarketDataService for Client {
    async fn get_bars(&self, request: &BarsRequest<'_>) -> Result<Value, AppError> {
        info!("Getting bars for {}", request.symbol);
        let bars = self
            .fetch(&market_data::GET_BARS, &[request.symbol], request.query())
            .await?;
        debug!("Bars obtained for {}: {}", request.symbol, count(&bars));
        Ok(bars)
    }

    async fn get_crypto_symbol_names(&self) -> Result<Value, AppError> {
        self.fetch(
            &market_data::GET_CRYPTO_SYMBOL_NAMES,
            &[],
            QueryArgs::new(),
        )
        .await
    }

    async fn get_symbol_details(&self, symbols: &str) -> Result<Value, AppError> {
        info!("Getting symbol details: {}", symbols);
        self.fetch(&market_data::GET_SYMBOL_DETAILS, &[symbols], QueryArgs::new())
            .await
    }

    async fn get_option_expirations(
        &self,
        underlying: &str,
        strike_price: Option<f64>,
    ) -> Result<Value, AppError> {
        let query = QueryArgs::new().with_opt("strikePrice", strike_price);
        self.fetch(&market_data::GET_OPTION_EXPIRATIONS, &[underlying], query)
            .await
    }

    async fn get_option_risk_reward(
        &self,
        request: &OptionRiskRewardRequest,
    ) -> Result<Value, AppError> {
        self.send(&market_data::GET_OPTION_RISK_REWARD, &[], request)
            .await
    }

    async fn get_option_spread_types(&self) -> Result<Value, AppError> {
        self.fetch(
            &market_data::GET_OPTION_SPREAD_TYPES,
            &[],
            QueryArgs::new(),
        )
        .await
    }

    async fn get_option_strikes(
        &self,
        request: &OptionStrikesRequest<'_>,
    ) -> Result<Value, AppError> {
        info!("Getting option strikes for {}", request.underlying);
        self.fetch(
            &market_data::GET_OPTION_STRIKES,
            &[request.underlying],
            request.query(),
        )
        .await
    }

    async fn get_quote_snapshots(&self, symbols: &str) -> Result<Value, AppError> {
        self.fetch(&market_data::GET_QUOTE_SNAPSHOTS, &[symbols], QueryArgs::new())
            .await
    }

    async fn stream_bars(&self, request: &BarsRequest<'_>) -> Result<RecordStream, AppError> {
        self.open(
            &market_data::STREAM_BARS,
            &[request.symbol],
            request.stream_query(),
        )
        .await
    }

    async fn stream_market_depth_quotes(
        &self,
        symbol: &str,
        max_levels: Option<u32>,
    ) -> Result<RecordStream, AppError> {
        let query = QueryArgs::new().with_opt("maxlevels", max_levels);
        self.open(&market_data::STREAM_MARKET_DEPTH_QUOTES, &[symbol], query)
            .await
    }

    async fn stream_market_depth_aggregates(
        &self,
        symbol: &str,
        max_levels: Option<u32>,
    ) -> Result<RecordStream, AppError> {
        let query = QueryArgs::new().with_opt("maxlevels", max_levels);
        self.open(
            &market_data::STREAM_MARKET_DEPTH_AGGREGATES,
            &[symbol],
            query,
        )
        .await
    }

    async fn stream_option_chain(
        &self,
        request: &OptionChainRequest<'_>,
    ) -> Result<RecordStream, AppError> {
        self.open(
            &market_data::STREAM_OPTION_CHAIN,
            &[request.underlying],
            request.query(),
        )
        .await
    }

    async fn stream_option_quotes(
        &self,
        request: &OptionQuotesRequest,
    ) -> Result<RecordStream, AppError> {
        if request.legs.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one option leg is required".to_string(),
            ));
        }
        self.open(&market_data::STREAM_OPTION_QUOTES, &[], request.query())
            .await
    }

    async fn stream_quotes(&self, symbols: &str) -> Result<RecordStream, AppError> {
        self.open(&market_data::STREAM_QUOTES, &[symbols], QueryArgs::new())
            .await
    }
}

#[async_trait]
impl SymbolService for Client {
    async fn search_symbols(&self, criteria: &str) -> Result<Value, AppError> {
        info!("Searching symbols: {}", criteria);
        self.fetch(&symbols::SEARCH_SYMBOLS, &[criteria], QueryArgs::new())
            .await
    }

    async fn suggest_symbols(
        &self,
        text: &str,
        top: Option<u32>,
        filter: Option<&str>,
    ) -> Result<Value, AppError> {
        let query = QueryArgs::new()
            .with_opt("$top", top)
            .with_opt("$filter", filter);
        self.fetch(&symbols::SUGGEST_SYMBOLS, &[text], query).await
    }
}
