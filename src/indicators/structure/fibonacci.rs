//! Fibonacci retracement levels

use crate::common::math;
use crate::models::candle::Candle;
use serde::Serialize;

pub const FIBONACCI_RATIOS: [f64; 7] = [0.0, 0.236, 0.382, 0.5, 0.618, 0.786, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FibonacciLevel {
    pub ratio: f64,
    pub price: f64,
}

impl FibonacciLevel {
    /// Label in percent, e.g. "61.8%"
    pub fn label(&self) -> String {
        format!("{:.1}%", self.ratio * 100.0)
    }
}

/// Retracement levels from `low` (0%) up to `high` (100%).
pub fn fibonacci_retracements(high: f64, low: f64) -> Vec<FibonacciLevel> {
    let diff = high - low;
    FIBONACCI_RATIOS
        .iter()
        .map(|&ratio| FibonacciLevel {
            ratio,
            price: if ratio >= 1.0 { high } else { low + ratio * diff },
        })
        .collect()
}

/// Retracements spanning the highest high and lowest low of the slice.
pub fn calculate_fibonacci(candles: &[Candle]) -> Option<Vec<FibonacciLevel>> {
    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
    Some(fibonacci_retracements(
        math::highest(&highs)?,
        math::lowest(&lows)?,
    ))
}
