//! Volatility indicators: Bollinger Bands, ATR, historical volatility

pub mod bollinger;
pub mod atr;
pub mod historical;

pub use bollinger::*;
pub use atr::*;
pub use historical::*;

