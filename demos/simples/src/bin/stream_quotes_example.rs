use std::sync::Arc;
use ts_client::prelude::*;

const MAX_RECORDS: usize = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::new(&Config::new())?.with_observer(Arc::new(TracingObserver));

    let mut quotes = client.stream_quotes("MSFT,AAPL").await?;
    let mut received = 0;
    while let Some(record) = quotes.next().await {
        match StreamEvent::from(record?) {
            StreamEvent::Data(quote) => {
                info!("{} last {}", quote["Symbol"], quote["Last"]);
                received += 1;
            }
            StreamEvent::Heartbeat(_) => debug!("heartbeat"),
            event if event.is_go_away() => {
                warn!("server asked to reconnect");
                break;
            }
            StreamEvent::Status(status) => info!("stream status: {}", status),
            StreamEvent::Error { error, message } => {
                warn!("stream error {}: {:?}", error, message);
                break;
            }
        }
        if received == MAX_RECORDS {
            break;
        }
    }
    quotes.close();
    info!("Received {} quotes", received);

    Ok(())
}
