//! Single-instrument technical signal watcher.
//!
//! Samples flow one way: market data provider -> indicator engine ->
//! signal decision engine -> notifier.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
