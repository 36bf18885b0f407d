//! Small numeric helpers shared by the indicator functions.

/// Round to two decimal places.
///
/// Rounds the exact binary value: 0.735 is stored as 0.73499... and
/// gives 0.73.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Arithmetic mean of the last `window` values.
///
/// Returns `None` when `window` is zero or the slice is shorter than `window`.
pub fn trailing_mean(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    let tail = &values[values.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

/// EMA smoothing multiplier `2 / (period + 1)`.
pub fn ema_multiplier(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Blend a new value into a running EMA.
pub fn ema_from_previous(value: f64, previous: f64, multiplier: f64) -> f64 {
    (value - previous) * multiplier + previous
}
