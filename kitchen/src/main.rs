use clap::Parser;
use kitchen::clock::TokioClock;
use kitchen::config::{Args, ShopConfig};
use kitchen::kitchen::Kitchen;
use kitchen::status_board::ConsoleBoard;
use kitchen::telemetry;
use stocks::Stock;
use tracing::{debug, info};

#[tokio::main]
async fn main() {
    if let Err(e) = telemetry::init() {
        eprintln!("Failed to initialize telemetry: {}", e);
    }
    let args = Args::parse();
    let config = ShopConfig::from(&args);
    info!(open = config.open, "[KITCHEN] ready for the order of the day");

    let mut kitchen = Kitchen::new(config, Stock::default(), TokioClock, ConsoleBoard);
    let outcome = kitchen.open_day().await;
    debug!(
        served = outcome.is_completed(),
        closed = kitchen.state().is_terminal(),
        ?outcome,
        "[KITCHEN] finished"
    );
}
