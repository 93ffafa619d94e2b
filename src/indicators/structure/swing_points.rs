//! Swing high/low detection

use crate::indicators::structure::fractals::detect_fractals;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SwingPoints {
    pub highs: Vec<usize>,
    pub lows: Vec<usize>,
}

/// Indices that are the strict extreme of the `2 * swing_period + 1` bars
/// centred on them, in ascending order.
pub fn detect_swing_points(values: &[f64], swing_period: usize) -> SwingPoints {
    let fractals = detect_fractals(values, swing_period);
    SwingPoints {
        highs: fractals.high_indices(),
        lows: fractals.low_indices(),
    }
}

/// The most recent swing high and swing low, if any.
pub fn last_swing_levels(values: &[f64], swing_period: usize) -> (Option<f64>, Option<f64>) {
    let points = detect_swing_points(values, swing_period);
    (
        points.highs.last().map(|&i| values[i]),
        points.lows.last().map(|&i| values[i]),
    )
}
