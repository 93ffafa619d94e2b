//! Classic floor-trader pivot points

use crate::models::candle::Candle;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PivotPoints {
    pub pp: f64,
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
}

/// Levels derived from a prior period's high, low and close.
pub fn pivot_points(high: f64, low: f64, close: f64) -> PivotPoints {
    let pp = (high + low + close) / 3.0;
    let range = high - low;
    PivotPoints {
        pp,
        r1: 2.0 * pp - low,
        r2: pp + range,
        r3: high + 2.0 * range,
        s1: 2.0 * pp - high,
        s2: pp - range,
        s3: low - 2.0 * range,
    }
}

/// Pivot points from the last completed bar (the one before the latest).
pub fn calculate_pivot_points(candles: &[Candle]) -> Option<PivotPoints> {
    let prior = candles.len().checked_sub(2).map(|i| &candles[i])?;
    Some(pivot_points(prior.high, prior.low, prior.close))
}
