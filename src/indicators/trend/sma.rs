//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Mean of the last `period` prices, rounded to 2 decimals
pub fn calculate_sma(prices: &[f64], period: usize) -> Option<f64> {
    math::trailing_mean(prices, period).map(math::round2)
}
