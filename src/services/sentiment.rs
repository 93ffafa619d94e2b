//! Sentiment provider interface.

use crate::models::sentiment::SentimentScore;
use crate::services::error::SentimentError;
use async_trait::async_trait;

#[async_trait]
pub trait SentimentProvider: Send + Sync {
    async fn sentiment(&self, symbol: &str) -> Result<SentimentScore, SentimentError>;
}

/// Always reports score 0 / NEUTRAL.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralSentiment;

#[async_trait]
impl SentimentProvider for NeutralSentiment {
    async fn sentiment(&self, _symbol: &str) -> Result<SentimentScore, SentimentError> {
        Ok(SentimentScore::neutral())
    }
}

/// Reports the same score for every symbol.
#[derive(Debug, Clone)]
pub struct FixedSentiment(pub SentimentScore);

#[async_trait]
impl SentimentProvider for FixedSentiment {
    async fn sentiment(&self, _symbol: &str) -> Result<SentimentScore, SentimentError> {
        Ok(self.0.clone())
    }
}
