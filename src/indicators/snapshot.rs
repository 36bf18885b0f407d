//! Builds an [`IndicatorSnapshot`] from a sample series.

use crate::config::SignalConfig;
use crate::models::indicators::{IndicatorSnapshot, Sample};

use super::momentum::{calculate_macd, calculate_rsi};
use super::trend::calculate_sma;
use super::volume::average_volume;

/// Compute every indicator for the series.
///
/// Returns `None` only for an empty series; short series yield a snapshot
/// whose indicators are individually unavailable.
pub fn build_snapshot(samples: &[Sample], config: &SignalConfig) -> Option<IndicatorSnapshot> {
    let last = samples.last()?;
    let closes: Vec<f64> = samples.iter().map(|s| s.close).collect();
    let volumes: Vec<f64> = samples.iter().map(|s| s.volume).collect();

    Some(IndicatorSnapshot {
        price: last.close,
        rsi: calculate_rsi(&closes, config.rsi_period),
        sma_short: calculate_sma(&closes, config.sma_short_period),
        sma_long: calculate_sma(&closes, config.sma_long_period),
        macd: calculate_macd(&closes, config.ema_fast_period, config.ema_slow_period),
        volume: last.volume,
        average_volume: average_volume(&volumes, config.volume_window),
    })
}
