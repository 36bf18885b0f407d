//! Market data provider interface.

use async_trait::async_trait;

use crate::models::indicators::Sample;
use crate::services::error::ServiceError;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Most recent `limit` samples for `symbol`, oldest first.
    async fn get_samples(&self, symbol: &str, limit: usize) -> Result<Vec<Sample>, ServiceError>;
}

/// Provider that always returns the same series. Used for dry runs and tests.
pub struct StaticMarketDataProvider {
    samples: Vec<Sample>,
}

impl StaticMarketDataProvider {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn get_samples(&self, _symbol: &str, limit: usize) -> Result<Vec<Sample>, ServiceError> {
        let start = self.samples.len().saturating_sub(limit);
        Ok(self.samples[start..].to_vec())
    }
}
