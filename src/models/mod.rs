//! Shared data models spanning the engine layers.

pub mod candle;
pub mod indicators;
pub mod sentiment;
pub mod signal;
pub mod timeframe;

pub use candle::Candle;
pub use indicators::{
    AdxIndicator, AtrIndicator, BollingerBandsIndicator, MacdIndicator, RsiIndicator,
};
pub use sentiment::{SentimentLabel, SentimentScore};
pub use signal::{Classification, Confidence, EntryStatus, SignalDirection, TradeSignal};
pub use timeframe::{Timeframe, TimeframeSet};
