//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// Calculate EMA for a specific period
///
/// The EMA is seeded with the single price `period` samples from the end and
/// blended forward through the remaining `period - 1` prices. There is no
/// longer warm-up; existing alert output depends on this seeding.
pub fn calculate_ema(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period {
        return None;
    }

    let window = &prices[prices.len() - period..];
    let multiplier = math::ema_multiplier(period);

    let ema = window[1..]
        .iter()
        .fold(window[0], |ema, &price| math::ema_from_previous(price, ema, multiplier));

    Some(ema)
}

