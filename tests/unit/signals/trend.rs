//! Unit tests for the moving-average trend classifier

use crate::fixtures::{candles_from_closes, downtrend_candles, linear, uptrend_candles};
use trendgate::config::IndicatorParams;
use trendgate::models::signal::Classification;
use trendgate::signals::trend::{classify_levels, TrendClassifier};

#[test]
fn ordered_levels_classify() {
    assert_eq!(classify_levels(110.0, 105.0, 100.0), Classification::Bullish);
    assert_eq!(classify_levels(90.0, 95.0, 100.0), Classification::Bearish);
}

#[test]
fn mixed_levels_are_neutral() {
    assert_eq!(classify_levels(104.0, 105.0, 100.0), Classification::Neutral);
    assert_eq!(classify_levels(110.0, 95.0, 100.0), Classification::Neutral);
    assert_eq!(classify_levels(100.0, 100.0, 100.0), Classification::Neutral);
}

#[test]
fn classifier_reads_trending_series() {
    let classifier = TrendClassifier::new(&IndicatorParams::default());
    assert_eq!(classifier.classify(&uptrend_candles()), Classification::Bullish);
    assert_eq!(classifier.classify(&downtrend_candles()), Classification::Bearish);
}

#[test]
fn too_little_history_is_neutral() {
    let classifier = TrendClassifier::new(&IndicatorParams::default());
    let short = candles_from_closes(&linear(150, 100.0, 1.0));

    assert_eq!(classifier.classify(&short), Classification::Neutral);
    assert_eq!(classifier.classify(&[]), Classification::Neutral);
}
