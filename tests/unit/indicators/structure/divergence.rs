//! Unit tests for divergence detection

use crate::fixtures::linear;
use trendgate::indicators::structure::{detect_divergence, detect_divergence_default};

fn defined(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

#[test]
fn test_rising_price_with_falling_indicator_is_bearish() {
    let price = linear(30, 1.0, 1.0);
    let indicator = defined(&linear(30, 100.0, -1.0));
    let found = detect_divergence_default(&price, &indicator);

    assert!(!found.bearish.is_empty());
    assert!(found.bullish.is_empty());
    assert_eq!(found.bearish[0].price_index, 29);
}

#[test]
fn test_falling_price_with_rising_indicator_is_bullish() {
    let price = linear(30, 100.0, -1.0);
    let indicator = defined(&linear(30, 10.0, 1.0));
    let found = detect_divergence(&price, &indicator, 20);

    assert!(!found.bullish.is_empty());
    assert!(found.bearish.is_empty());
}

#[test]
fn test_confirming_indicator_has_no_divergence() {
    let price = linear(30, 1.0, 1.0);
    let indicator = defined(&linear(30, 10.0, 1.0));
    assert!(detect_divergence_default(&price, &indicator).is_empty());
}

#[test]
fn test_aligned_indicator_peak_lower_than_before() {
    // price peaks at 12 above its value five bars earlier, the oscillator
    // peaks one bar later below its own reading five bars earlier
    let price = [
        10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0, 20.0, 21.0, 25.0, 22.0, 21.0,
        20.0, 19.0, 18.0,
    ];
    let indicator = [
        60.0, 62.0, 64.0, 66.0, 68.0, 70.0, 72.0, 74.0, 76.0, 78.0, 80.0, 70.0, 60.0, 65.0, 50.0,
        45.0, 40.0, 35.0,
    ];
    let found = detect_divergence(&price, &defined(&indicator), 20);

    assert_eq!(found.bearish.len(), 1);
    assert_eq!(found.bearish[0].price_index, 12);
    assert_eq!(found.bearish[0].indicator_index, 13);
}

#[test]
fn test_mismatched_lengths_find_nothing() {
    let price = linear(10, 1.0, 1.0);
    let indicator = defined(&linear(9, 1.0, 1.0));
    assert!(detect_divergence_default(&price, &indicator).is_empty());
}

#[test]
fn test_undefined_indicator_finds_nothing() {
    let price = linear(30, 1.0, 1.0);
    let indicator = vec![None; 30];
    assert!(detect_divergence_default(&price, &indicator).is_empty());
}
