use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("invalid market data: {0}")]
    InvalidData(String),
    #[error("cache error: {0}")]
    Cache(String),
    #[error("no data for {0}")]
    NotFound(String),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

impl MarketDataError {
    /// Transport failures, rate limiting and server errors may succeed on a
    /// later attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            MarketDataError::Http(_) | MarketDataError::Timeout(_) => true,
            MarketDataError::Status { status, .. } => *status == 429 || (500..=599).contains(status),
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("sentiment unavailable: {0}")]
    Unavailable(String),
}
