//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::indicators::series::{self, Series};
use crate::models::candle::{closes, Candle};

/// EMA seeded with the SMA of the first `period` values at index `period - 1`.
///
/// Thereafter `ema[i] = ema[i-1] + alpha * (value[i] - ema[i-1])` with
/// `alpha = 2 / (period + 1)`.
pub fn ema(values: &[f64], period: usize) -> Series {
    let mut out = series::undefined(values.len());
    if period == 0 || values.len() < period {
        return out;
    }

    let Some(mut prev) = math::mean(&values[..period]) else {
        return out;
    };
    out[period - 1] = Some(prev);

    for (i, value) in values.iter().enumerate().skip(period) {
        prev = math::ema_from_previous(*value, prev, period);
        out[i] = Some(prev);
    }
    out
}

/// EMA over a series that may carry a leading undefined run.
///
/// The seed is taken from the first `period` defined values; the output keeps
/// the input's alignment.
pub fn ema_series(input: &[Option<f64>], period: usize) -> Series {
    let mut out = series::undefined(input.len());
    let Some(start) = series::first_defined(input) else {
        return out;
    };

    let defined: Vec<f64> = input[start..].iter().map_while(|v| *v).collect();
    for (offset, value) in ema(&defined, period).into_iter().enumerate() {
        out[start + offset] = value;
    }
    out
}

/// Latest EMA of closing prices
pub fn calculate_ema(candles: &[Candle], period: u32) -> Option<f64> {
    series::latest(&ema(&closes(candles), period as usize))
}
