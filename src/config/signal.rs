//! Indicator periods, decision thresholds and target multipliers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalConfig {
    pub rsi_period: usize,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub sma_short_period: usize,
    pub sma_long_period: usize,
    pub ema_fast_period: usize,
    pub ema_slow_period: usize,
    pub volume_window: usize,
    pub volume_surge_multiplier: f64,
    /// Minimum number of collected reasons before an alert may fire.
    pub min_reasons: usize,
    pub buy_take_profit: f64,
    pub buy_stop_loss: f64,
    pub sell_take_profit: f64,
    pub sell_stop_loss: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            sma_short_period: 50,
            sma_long_period: 200,
            ema_fast_period: 12,
            ema_slow_period: 26,
            volume_window: 50,
            volume_surge_multiplier: 1.5,
            min_reasons: 3,
            buy_take_profit: 1.05,
            buy_stop_loss: 0.975,
            sell_take_profit: 0.95,
            sell_stop_loss: 1.025,
        }
    }
}

impl SignalConfig {
    /// Series length at which every indicator is available.
    pub fn min_samples(&self) -> usize {
        self.rsi_period
            .max(self.sma_long_period)
            .max(self.ema_slow_period)
            + 1
    }
}
