//! Collaborators around the engine: market data, cache and sentiment.

pub mod binance;
pub mod cache;
pub mod error;
pub mod market_data;
pub mod sentiment;

pub use error::{MarketDataError, SentimentError};
pub use market_data::{fetch_timeframe_set, MarketDataProvider, StaticMarketDataProvider};
pub use sentiment::{FixedSentiment, NeutralSentiment, SentimentProvider};
