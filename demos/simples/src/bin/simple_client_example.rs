use ts_client::application::client::Client;
use ts_client::application::config::Config;
use ts_client::application::interfaces::account::AccountService;
use ts_client::application::interfaces::market_data::MarketDataService;
use ts_client::model::requests::BarsRequest;
use ts_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // Token and base url come from TS_ACCESS_TOKEN / TS_API_BASE_URL
    let config = Config::new();
    info!("Configuration: {}", config);
    let client = Client::new(&config)?;

    let accounts = client.get_accounts().await?;
    info!("Accounts: {}", serde_json::to_string_pretty(&accounts)?);

    let quotes = client.get_quote_snapshots("MSFT,AAPL").await?;
    info!("Quotes: {}", serde_json::to_string_pretty(&quotes)?);

    let bars = client
        .get_bars(&BarsRequest::new("MSFT").with_barsback(5))
        .await?;
    info!("Last 5 daily bars: {}", bars);

    Ok(())
}
