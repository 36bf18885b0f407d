//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::indicators::trend::calculate_ema;

pub const DEFAULT_MACD_FAST: usize = 12;
pub const DEFAULT_MACD_SLOW: usize = 26;

/// Calculate the MACD line
///
/// MACD = EMA(fast) - EMA(slow), rounded to 2 decimals. Unavailable if
/// either EMA is unavailable.
pub fn calculate_macd(prices: &[f64], fast_period: usize, slow_period: usize) -> Option<f64> {
    let fast_ema = calculate_ema(prices, fast_period)?;
    let slow_ema = calculate_ema(prices, slow_period)?;
    Some(math::round2(fast_ema - slow_ema))
}

/// Calculate MACD with default periods (12, 26)
pub fn calculate_macd_default(prices: &[f64]) -> Option<f64> {
    calculate_macd(prices, DEFAULT_MACD_FAST, DEFAULT_MACD_SLOW)
}
