//! Unit tests for Fibonacci retracements

use crate::fixtures::{candles_from_closes, linear};
use trendgate::indicators::structure::{calculate_fibonacci, fibonacci_retracements};

#[test]
fn test_fibonacci_levels_between_low_and_high() {
    let levels = fibonacci_retracements(200.0, 100.0);
    let expected = [100.0, 123.6, 138.2, 150.0, 161.8, 178.6, 200.0];

    assert_eq!(levels.len(), expected.len());
    for (level, price) in levels.iter().zip(expected) {
        assert!((level.price - price).abs() < 1e-9, "{} != {}", level.price, price);
    }
    assert_eq!(levels.first().unwrap().price, 100.0);
    assert_eq!(levels.last().unwrap().price, 200.0);
}

#[test]
fn test_fibonacci_labels() {
    let levels = fibonacci_retracements(2.0, 1.0);
    let labels: Vec<String> = levels.iter().map(|l| l.label()).collect();
    assert_eq!(labels[0], "0.0%");
    assert_eq!(labels[4], "61.8%");
    assert_eq!(labels[6], "100.0%");
}

#[test]
fn test_calculate_fibonacci_spans_extremes() {
    let candles = candles_from_closes(&linear(10, 100.0, 1.0));
    let levels = calculate_fibonacci(&candles).unwrap();

    assert_eq!(levels[0].price, 99.5);
    assert_eq!(levels[6].price, 109.5);
    assert!(calculate_fibonacci(&[]).is_none());
}
