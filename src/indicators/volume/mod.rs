//! Volume-flow indicators: VWAP, CMF

pub mod cmf;
pub mod vwap;

pub use cmf::*;
pub use vwap::*;
