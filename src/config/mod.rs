//! Process configuration loaded from the environment.

pub mod signal;

use std::env;
use std::time::Duration;

use thiserror::Error;

pub use signal::SignalConfig;

pub const DEFAULT_SYMBOL: &str = "SOLUSDT";
pub const DEFAULT_INTERVAL: &str = "1m";
pub const DEFAULT_LIMIT: usize = 200;
pub const DEFAULT_BINANCE_BASE_URL: &str = "https://api.binance.com";
pub const DEFAULT_TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub telegram_base_url: String,
    pub binance_base_url: String,
    pub symbol: String,
    pub interval: String,
    pub limit: usize,
    pub evaluation_interval: Duration,
    pub data_retry: Duration,
    pub error_backoff: Duration,
    pub signal: SignalConfig,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// Telegram credentials are required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            telegram_token: required("TELEGRAM_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
            telegram_base_url: env::var("TELEGRAM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TELEGRAM_BASE_URL.to_string()),
            binance_base_url: env::var("BINANCE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BINANCE_BASE_URL.to_string()),
            symbol: env::var("SYMBOL").unwrap_or_else(|_| DEFAULT_SYMBOL.to_string()),
            interval: env::var("INTERVAL").unwrap_or_else(|_| DEFAULT_INTERVAL.to_string()),
            limit: parsed("LIMIT", DEFAULT_LIMIT)?,
            evaluation_interval: Duration::from_secs(parsed("EVAL_INTERVAL_SECONDS", 60)?),
            data_retry: Duration::from_secs(parsed("DATA_RETRY_SECONDS", 60)?),
            error_backoff: Duration::from_secs(parsed("ERROR_BACKOFF_SECONDS", 30)?),
            signal: SignalConfig::default(),
        })
    }
}

/// Deployment environment name from `APP_ENV` (defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn parsed<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
