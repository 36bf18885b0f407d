//! Indicator engine: stateless functions over closing prices and volumes.
//!
//! Each function returns `None` when the series is too short, never a
//! placeholder zero.

pub mod momentum;
pub mod snapshot;
pub mod trend;
pub mod volume;

pub use momentum::*;
pub use snapshot::*;
pub use trend::*;
pub use volume::*;
