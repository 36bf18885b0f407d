//! Binance REST kline provider.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::DEFAULT_BINANCE_BASE_URL;
use crate::models::indicators::Sample;
use crate::services::error::ServiceError;
use crate::services::market_data::MarketDataProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const CLOSE_INDEX: usize = 4;
const VOLUME_INDEX: usize = 5;

pub struct BinanceKlineProvider {
    client: reqwest::Client,
    base_url: String,
    interval: String,
}

impl BinanceKlineProvider {
    pub fn new(interval: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BINANCE_BASE_URL, interval)
    }

    pub fn with_base_url(base_url: impl Into<String>, interval: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(base_url, interval, client)
    }

    pub fn with_client(
        base_url: impl Into<String>,
        interval: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            interval: interval.into(),
        }
    }
}

#[async_trait]
impl MarketDataProvider for BinanceKlineProvider {
    async fn get_samples(&self, symbol: &str, limit: usize) -> Result<Vec<Sample>, ServiceError> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let limit = limit.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", self.interval.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(symbol = %symbol, status = status.as_u16(), "Binance API error");
            return Err(ServiceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let klines: Vec<Vec<Value>> = response.json().await?;
        let samples = parse_klines(&klines)?;
        if samples.is_empty() {
            return Err(ServiceError::EmptySeries(symbol.to_string()));
        }

        debug!(symbol = %symbol, count = samples.len(), "fetched klines");
        Ok(samples)
    }
}

/// Extract (close, volume) from raw kline rows.
pub fn parse_klines(klines: &[Vec<Value>]) -> Result<Vec<Sample>, ServiceError> {
    klines
        .iter()
        .enumerate()
        .map(|(row, kline)| {
            let close = field(kline, CLOSE_INDEX, row)?;
            let volume = field(kline, VOLUME_INDEX, row)?;
            Ok(Sample::new(close, volume))
        })
        .collect()
}

// Binance encodes prices and volumes as JSON strings.
fn field(kline: &[Value], index: usize, row: usize) -> Result<f64, ServiceError> {
    let value = kline
        .get(index)
        .ok_or_else(|| ServiceError::Decode(format!("kline {} has no field {}", row, index)))?;

    let parsed = match value {
        Value::String(s) => s.parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        ServiceError::Decode(format!("kline {} field {} is not numeric: {}", row, index, value))
    })
}
