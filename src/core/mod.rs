//! Core application primitives (driver loop)

pub mod runtime;

pub use runtime::*;
