//! Signal decision engine.

pub mod decision;
pub mod engine;
pub mod rules;

pub use decision::*;
pub use engine::*;
pub use rules::*;
