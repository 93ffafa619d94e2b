//! Unit tests for sentiment scores

use trendgate::models::sentiment::{SentimentLabel, SentimentScore};

#[test]
fn score_clamped_to_bounds() {
    assert_eq!(SentimentScore::new(SentimentLabel::Bullish, 42.0, "").score(), 10.0);
    assert_eq!(SentimentScore::new(SentimentLabel::Bearish, -11.0, "").score(), -10.0);
    assert_eq!(SentimentScore::new(SentimentLabel::Neutral, f64::NAN, "").score(), 0.0);
}

#[test]
fn neutral_default() {
    let neutral = SentimentScore::default();
    assert_eq!(neutral.label(), SentimentLabel::Neutral);
    assert_eq!(neutral.score(), 0.0);
    assert_eq!(neutral.summary(), "No data available");
}

#[test]
fn labels_render_uppercase() {
    assert_eq!(SentimentLabel::Bearish.to_string(), "BEARISH");
    let json = serde_json::to_value(SentimentScore::neutral()).unwrap();
    assert_eq!(json["label"], "NEUTRAL");
}

#[test]
fn decoded_score_is_clamped() {
    let decoded: SentimentScore =
        serde_json::from_str(r#"{"label":"BULLISH","score":25.0,"summary":"hype"}"#).unwrap();
    assert_eq!(decoded.score(), 10.0);
    assert_eq!(decoded.summary(), "hype");

    let bare: SentimentScore = serde_json::from_str(r#"{"label":"BEARISH","score":-3.5}"#).unwrap();
    assert_eq!(bare.score(), -3.5);
    assert_eq!(bare.summary(), "");
}

#[test]
fn label_follows_score_sign() {
    assert_eq!(SentimentScore::from_score(3.0, "").label(), SentimentLabel::Bullish);
    assert_eq!(SentimentScore::from_score(-0.5, "").label(), SentimentLabel::Bearish);
    assert_eq!(SentimentScore::from_score(0.0, "").label(), SentimentLabel::Neutral);
    assert_eq!(SentimentScore::from_score(-40.0, "").score(), -10.0);
}
