//! Multi-timeframe trade signal engine.
//!
//! Price history for six timeframes flows through a technical-indicator
//! library into a gated top-down cascade that yields a single
//! [`models::TradeSignal`].

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
