//! Unit tests for Williams %R

use crate::fixtures::base_time;
use chrono::Duration;
use trendgate::indicators::momentum::williams_r;
use trendgate::models::candle::Candle;

fn bar(i: i64, high: f64, low: f64, close: f64) -> Candle {
    Candle::new(close, high, low, close, 100.0, base_time() + Duration::minutes(i))
}

#[test]
fn test_williams_r_range() {
    let candles = vec![
        bar(0, 12.0, 8.0, 10.0),
        bar(1, 14.0, 9.0, 14.0),
        bar(2, 13.0, 10.0, 10.0),
    ];
    let out = williams_r(&candles, 3);

    assert!(out[0].is_none() && out[1].is_none());
    // highest 14, lowest 8, close 10
    let value = out[2].unwrap();
    assert!((value - (-4.0 / 6.0 * 100.0)).abs() < 1e-9);
}

#[test]
fn test_williams_r_extremes() {
    let at_high = vec![bar(0, 10.0, 5.0, 7.0), bar(1, 12.0, 6.0, 12.0)];
    assert_eq!(williams_r(&at_high, 2)[1], Some(0.0));

    let at_low = vec![bar(0, 10.0, 5.0, 7.0), bar(1, 9.0, 5.0, 5.0)];
    assert_eq!(williams_r(&at_low, 2)[1], Some(-100.0));
}

#[test]
fn test_williams_r_flat_window_reads_zero() {
    let candles: Vec<Candle> = (0..5).map(|i| bar(i, 10.0, 10.0, 10.0)).collect();
    assert_eq!(williams_r(&candles, 5)[4], Some(0.0));
}
