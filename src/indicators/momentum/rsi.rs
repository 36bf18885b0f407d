//! RSI (Relative Strength Index) indicator

use crate::common::math;

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Calculate RSI over closing prices
///
/// Deltas are taken across the whole series but only the last `period`
/// gains and losses are averaged.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
pub fn calculate_rsi(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(prices.len() - 1);
    let mut losses = Vec::with_capacity(prices.len() - 1);

    for pair in prices.windows(2) {
        let change = pair[1] - pair[0];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let avg_gain = gains.iter().rev().take(period).sum::<f64>() / period as f64;
    let avg_loss = losses.iter().rev().take(period).sum::<f64>() / period as f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(math::round2(100.0 - (100.0 / (1.0 + rs))))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(prices: &[f64]) -> Option<f64> {
    calculate_rsi(prices, DEFAULT_RSI_PERIOD)
}
