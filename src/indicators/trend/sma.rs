//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::indicators::series::{self, Series};
use crate::models::candle::{closes, Candle};

/// Arithmetic mean of the trailing `period` values.
pub fn sma(values: &[f64], period: usize) -> Series {
    let mut out = series::undefined(values.len());
    if period == 0 || values.len() < period {
        return out;
    }

    for i in (period - 1)..values.len() {
        out[i] = math::mean(&values[i + 1 - period..=i]);
    }
    out
}

/// SMA over a series that may carry a leading undefined run, keeping the
/// input's alignment.
pub fn sma_series(input: &[Option<f64>], period: usize) -> Series {
    let mut out = series::undefined(input.len());
    let Some(start) = series::first_defined(input) else {
        return out;
    };

    let defined: Vec<f64> = input[start..].iter().map_while(|v| *v).collect();
    for (offset, value) in sma(&defined, period).into_iter().enumerate() {
        out[start + offset] = value;
    }
    out
}

/// Latest SMA of closing prices
pub fn calculate_sma(candles: &[Candle], period: u32) -> Option<f64> {
    series::latest(&sma(&closes(candles), period as usize))
}
