//! Momentum indicators: RSI, MACD, Williams %R, Stochastic, CCI, ROC

pub mod cci;
pub mod macd;
pub mod roc;
pub mod rsi;
pub mod stochastic;
pub mod williams_r;

pub use cci::*;
pub use macd::*;
pub use roc::*;
pub use rsi::*;
pub use stochastic::*;
pub use williams_r::*;
