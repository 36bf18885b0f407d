//! Sequential evaluation loop: fetch samples, compute indicators, decide,
//! optionally notify, sleep.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::{Config, DEFAULT_INTERVAL, DEFAULT_LIMIT, DEFAULT_SYMBOL};
use crate::indicators::build_snapshot;
use crate::models::signal::Trend;
use crate::services::market_data::MarketDataProvider;
use crate::services::notifier::Notifier;
use crate::signals::engine::SignalEngine;

/// Configuration for the driver loop
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub symbol: String,
    pub interval: String,
    pub limit: usize,
    /// Pause after a completed cycle.
    pub evaluation_interval: Duration,
    /// Pause after a cycle skipped for lack of data.
    pub data_retry: Duration,
    /// Pause after a failed cycle.
    pub error_backoff: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            interval: DEFAULT_INTERVAL.to_string(),
            limit: DEFAULT_LIMIT,
            evaluation_interval: Duration::from_secs(60),
            data_retry: Duration::from_secs(60),
            error_backoff: Duration::from_secs(30),
        }
    }
}

impl From<&Config> for RuntimeConfig {
    fn from(config: &Config) -> Self {
        Self {
            symbol: config.symbol.clone(),
            interval: config.interval.clone(),
            limit: config.limit,
            evaluation_interval: config.evaluation_interval,
            data_retry: config.data_retry,
            error_backoff: config.error_backoff,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// No usable samples; the engine was not invoked.
    Skipped,
    /// Indicators evaluated, no alert.
    Evaluated { candidate: Trend },
    /// Alert fired. `delivered` is false when the notifier failed.
    Alerted { direction: Trend, delivered: bool },
}

#[derive(Debug, Error)]
pub enum CycleError {
    #[error("malformed market data: {0}")]
    MalformedData(String),
}

/// Drives the signal engine on a fixed cadence.
pub struct SignalRuntime {
    config: RuntimeConfig,
    provider: Arc<dyn MarketDataProvider>,
    notifier: Arc<dyn Notifier>,
    engine: SignalEngine,
}

impl SignalRuntime {
    pub fn new(
        config: RuntimeConfig,
        provider: Arc<dyn MarketDataProvider>,
        notifier: Arc<dyn Notifier>,
        engine: SignalEngine,
    ) -> Self {
        Self {
            config,
            provider,
            notifier,
            engine,
        }
    }

    pub fn engine(&self) -> &SignalEngine {
        &self.engine
    }

    /// Run a single evaluation cycle.
    ///
    /// Any provider failure (transport, API status, undecodable body or
    /// rows, empty series) skips the cycle. A delivery failure is logged;
    /// the engine's trend memory is not rolled back.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome, CycleError> {
        let samples = match self
            .provider
            .get_samples(&self.config.symbol, self.config.limit)
            .await
        {
            Ok(samples) => samples,
            Err(e) => {
                warn!(symbol = %self.config.symbol, error = %e, "market data unavailable, skipping cycle");
                return Ok(CycleOutcome::Skipped);
            }
        };

        if samples
            .iter()
            .any(|s| !s.close.is_finite() || !s.volume.is_finite())
        {
            return Err(CycleError::MalformedData(
                "non-finite close or volume".to_string(),
            ));
        }

        let snapshot = match build_snapshot(&samples, self.engine.config()) {
            Some(snapshot) => snapshot,
            None => {
                warn!(symbol = %self.config.symbol, "empty sample series, skipping cycle");
                return Ok(CycleOutcome::Skipped);
            }
        };

        debug!(
            symbol = %self.config.symbol,
            samples = samples.len(),
            snapshot = ?snapshot,
            "indicators computed"
        );

        let decision = self.engine.evaluate_detailed(&snapshot);
        let Some(alert) = decision.alert else {
            return Ok(CycleOutcome::Evaluated {
                candidate: decision.candidate,
            });
        };

        let delivered = match self.notifier.send(&alert.to_message()).await {
            Ok(()) => {
                info!(symbol = %self.config.symbol, direction = %alert.direction, "alert delivered");
                true
            }
            Err(e) => {
                error!(symbol = %self.config.symbol, error = %e, "alert delivery failed");
                false
            }
        };

        Ok(CycleOutcome::Alerted {
            direction: alert.direction,
            delivered,
        })
    }

    /// Pause to apply after a cycle result.
    pub fn next_delay(&self, result: &Result<CycleOutcome, CycleError>) -> Duration {
        match result {
            Ok(CycleOutcome::Skipped) => self.config.data_retry,
            Ok(_) => self.config.evaluation_interval,
            Err(_) => self.config.error_backoff,
        }
    }

    /// Loop until `shutdown` resolves. Cycles never overlap and a failed
    /// cycle never stops the loop.
    pub async fn run<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        info!(
            symbol = %self.config.symbol,
            interval = %self.config.interval,
            every = ?self.config.evaluation_interval,
            "SignalRuntime: started"
        );

        loop {
            let result = self.run_cycle().await;
            if let Err(e) = &result {
                error!(error = %e, "evaluation cycle failed");
            }
            let delay = self.next_delay(&result);

            tokio::select! {
                _ = &mut shutdown => {
                    info!("SignalRuntime: shutdown requested");
                    break;
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}
