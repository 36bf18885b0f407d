//! Volume indicators

/// Mean of the last `window` volume samples.
///
/// The surge test against this average lives on
/// [`IndicatorSnapshot::volume_surge`](crate::models::IndicatorSnapshot::volume_surge).
pub fn average_volume(volumes: &[f64], window: usize) -> Option<f64> {
    crate::common::math::trailing_mean(volumes, window)
}
