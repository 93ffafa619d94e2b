//! Unit tests for collaborator wiring

use tokio_test::block_on;
use trendgate::config::ServiceConfig;
use trendgate::core::bootstrap::sentiment_provider;
use trendgate::models::sentiment::SentimentLabel;
use trendgate::services::SentimentProvider;

#[test]
fn configured_score_becomes_fixed_sentiment() {
    let service = ServiceConfig {
        sentiment_score: Some(-4.5),
        ..ServiceConfig::default()
    };
    let score = block_on(sentiment_provider(&service).sentiment("BTC/USDT")).unwrap();

    assert_eq!(score.label(), SentimentLabel::Bearish);
    assert_eq!(score.score(), -4.5);
}

#[test]
fn unset_score_is_neutral() {
    let score = block_on(sentiment_provider(&ServiceConfig::default()).sentiment("ETH/USDT")).unwrap();
    assert_eq!(score.label(), SentimentLabel::Neutral);
    assert_eq!(score.score(), 0.0);
}
