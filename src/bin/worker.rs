//! Signal worker
//!
//! Polls Binance klines for one symbol, evaluates the indicator consensus and
//! sends alerts to Telegram.

use dotenvy::dotenv;
use solsignal::config::{self, Config};
use solsignal::core::runtime::{RuntimeConfig, SignalRuntime};
use solsignal::logging;
use solsignal::services::{BinanceKlineProvider, MarketDataProvider, Notifier, TelegramNotifier};
use solsignal::signals::SignalEngine;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let env = config::get_environment();
    info!("Starting signal worker");
    info!(environment = %env, "Environment");

    let config = Config::from_env()?;
    info!(
        symbol = %config.symbol,
        interval = %config.interval,
        limit = config.limit,
        "Watching {} on {} bars",
        config.symbol,
        config.interval
    );

    if config.limit < config.signal.min_samples() {
        warn!(
            limit = config.limit,
            required = config.signal.min_samples(),
            "LIMIT is below the series length needed for every indicator"
        );
    }

    let provider: Arc<dyn MarketDataProvider> = Arc::new(BinanceKlineProvider::with_base_url(
        config.binance_base_url.clone(),
        config.interval.clone(),
    ));
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::with_base_url(
        config.telegram_base_url.clone(),
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
    ));

    let engine = SignalEngine::new(config.signal.clone());
    let mut runtime = SignalRuntime::new(RuntimeConfig::from(&config), provider, notifier, engine);

    runtime
        .run(async {
            if let Err(e) = signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await;

    info!("Signal worker stopped");
    Ok(())
}
