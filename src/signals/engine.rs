//! Stateful wrapper that threads the trend memory between cycles.

use tracing::{debug, info};

use crate::config::SignalConfig;
use crate::indicators::build_snapshot;
use crate::models::indicators::{IndicatorSnapshot, Sample};
use crate::models::signal::{Alert, Trend};
use crate::signals::decision::{decide, Decision};

pub struct SignalEngine {
    config: SignalConfig,
    last_emitted: Option<Trend>,
}

impl SignalEngine {
    pub fn new(config: SignalConfig) -> Self {
        Self {
            config,
            last_emitted: None,
        }
    }

    /// Start from a previously observed trend.
    pub fn with_last_emitted(mut self, trend: Option<Trend>) -> Self {
        self.last_emitted = trend.filter(|t| t.is_directional());
        self
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    pub fn last_emitted(&self) -> Option<Trend> {
        self.last_emitted
    }

    /// Run one decision cycle and update the trend memory.
    pub fn evaluate(&mut self, snapshot: &IndicatorSnapshot) -> Option<Alert> {
        self.evaluate_detailed(snapshot).alert
    }

    /// Like [`evaluate`](Self::evaluate) but returns the full decision.
    pub fn evaluate_detailed(&mut self, snapshot: &IndicatorSnapshot) -> Decision {
        let decision = decide(snapshot, self.last_emitted, &self.config);

        debug!(
            candidate = %decision.candidate,
            reasons = decision.reasons.len(),
            previous = ?self.last_emitted,
            "SignalEngine: evaluated snapshot"
        );

        if let Some(alert) = &decision.alert {
            info!(
                direction = %alert.direction,
                price = alert.price,
                take_profit = alert.take_profit,
                stop_loss = alert.stop_loss,
                "SignalEngine: alert fired"
            );
        }

        self.last_emitted = decision.last_emitted;
        decision
    }

    /// Compute indicators for `samples` and evaluate them.
    ///
    /// An empty series leaves the memory untouched and returns `None`.
    pub fn evaluate_samples(&mut self, samples: &[Sample]) -> Option<Alert> {
        let snapshot = build_snapshot(samples, &self.config)?;
        self.evaluate(&snapshot)
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(SignalConfig::default())
    }
}
