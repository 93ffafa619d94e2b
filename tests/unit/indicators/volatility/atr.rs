//! Unit tests for ATR indicator

use crate::fixtures::{candles_from_closes, linear, ranging_entry_candles};
use trendgate::indicators::volatility::{atr, calculate_atr, calculate_atr_default};

#[test]
fn test_atr_first_value_at_period() {
    let candles = ranging_entry_candles();
    let out = atr(&candles, 14);

    assert!(out[..14].iter().all(Option::is_none));
    assert!(out[14].is_some());
}

#[test]
fn test_atr_constant_range() {
    let reading = calculate_atr_default(&ranging_entry_candles()).unwrap();
    assert!((reading.value - 2.0).abs() < 1e-12);
    assert_eq!(reading.period, 14);
}

#[test]
fn test_atr_positive_for_trending_bars() {
    let candles = candles_from_closes(&linear(50, 100.0, 2.0));
    assert!(calculate_atr(&candles, 14).unwrap().value > 0.0);
}

#[test]
fn test_atr_insufficient_data() {
    let candles = candles_from_closes(&linear(14, 100.0, 1.0));
    assert!(calculate_atr(&candles, 14).is_none());
}
