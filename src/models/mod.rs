//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod signal;

pub use indicators::{IndicatorSnapshot, Sample};
pub use signal::{Alert, SignalReason, Trend};
