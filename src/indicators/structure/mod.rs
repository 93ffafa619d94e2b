//! Structural levels and pattern detectors

pub mod divergence;
pub mod fibonacci;
pub mod fractals;
pub mod market_profile;
pub mod pivots;
pub mod swing_points;

pub use divergence::*;
pub use fibonacci::*;
pub use fractals::*;
pub use market_profile::*;
pub use pivots::*;
pub use swing_points::*;
