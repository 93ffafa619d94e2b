//! ATR (Average True Range) indicator

use crate::common::math;
use crate::indicators::series::{self, Series};
use crate::models::candle::Candle;
use crate::models::indicators::AtrIndicator;

/// Wilder-smoothed true range.
///
/// True range needs a previous close, so the first value sits at index
/// `period` and is the mean of the true ranges of bars 1..=period.
pub fn atr(candles: &[Candle], period: usize) -> Series {
    let mut out = series::undefined(candles.len());
    if period == 0 || candles.len() <= period {
        return out;
    }

    let true_ranges: Vec<f64> = candles
        .windows(2)
        .map(|w| math::true_range(w[1].high, w[1].low, w[0].close))
        .collect();

    let Some(mut prev) = math::mean(&true_ranges[..period]) else {
        return out;
    };
    out[period] = Some(prev);

    for i in (period + 1)..candles.len() {
        prev = math::wilder_average(prev, true_ranges[i - 1], period);
        out[i] = Some(prev);
    }
    out
}

/// Latest ATR reading
pub fn calculate_atr(candles: &[Candle], period: u32) -> Option<AtrIndicator> {
    let value = series::latest(&atr(candles, period as usize))?;
    Some(AtrIndicator { value, period })
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(candles: &[Candle]) -> Option<AtrIndicator> {
    calculate_atr(candles, 14)
}
