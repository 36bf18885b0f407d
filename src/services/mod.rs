//! External collaborators: market data and alert delivery.

pub mod binance;
pub mod error;
pub mod market_data;
pub mod notifier;
pub mod telegram;

pub use binance::BinanceKlineProvider;
pub use error::ServiceError;
pub use market_data::{MarketDataProvider, StaticMarketDataProvider};
pub use notifier::{Notifier, RecordingNotifier};
pub use telegram::TelegramNotifier;
