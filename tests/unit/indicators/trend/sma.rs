//! Unit tests for SMA indicator

use crate::fixtures::{candles_from_closes, linear};
use trendgate::indicators::trend::{calculate_sma, sma};

#[test]
fn test_sma_keeps_length_and_undefined_prefix() {
    let values = linear(30, 10.0, 1.0);
    let out = sma(&values, 10);

    assert_eq!(out.len(), values.len());
    assert!(out[..9].iter().all(Option::is_none));
    assert!(out[9..].iter().all(Option::is_some));
}

#[test]
fn test_sma_window_means() {
    let out = sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
    assert_eq!(out, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn test_sma_insufficient_data() {
    assert!(sma(&[1.0, 2.0], 3).iter().all(Option::is_none));
    assert!(calculate_sma(&candles_from_closes(&[1.0, 2.0]), 3).is_none());
}

#[test]
fn test_sma_zero_period_is_undefined() {
    assert!(sma(&[1.0, 2.0, 3.0], 0).iter().all(Option::is_none));
}

#[test]
fn test_calculate_sma_reads_last_window() {
    let candles = candles_from_closes(&linear(20, 1.0, 1.0));
    assert_eq!(calculate_sma(&candles, 4), Some(18.5));
}
