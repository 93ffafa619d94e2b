//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::series::{self, Series};
use crate::indicators::trend::ema::{ema, ema_series};
use crate::models::candle::{closes, Candle};
use crate::models::indicators::MacdIndicator;

/// Aligned MACD line, signal line and histogram.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Series,
    pub signal: Series,
    pub histogram: Series,
}

/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// The MACD line is defined once the slow EMA is; the signal EMA is seeded
/// from the first `signal_period` MACD values.
pub fn macd(values: &[f64], fast_period: usize, slow_period: usize, signal_period: usize) -> MacdSeries {
    let fast = ema(values, fast_period);
    let slow = ema(values, slow_period);
    let macd = series::zip_with(&fast, &slow, |f, s| f - s);
    let signal = ema_series(&macd, signal_period);
    let histogram = series::zip_with(&macd, &signal, |m, s| m - s);

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}

/// Latest MACD reading
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    let lines = macd(
        &closes(candles),
        fast_period as usize,
        slow_period as usize,
        signal_period as usize,
    );

    Some(MacdIndicator {
        macd: series::latest(&lines.macd)?,
        signal: series::latest(&lines.signal)?,
        histogram: series::latest(&lines.histogram)?,
        period: Some((fast_period, slow_period, signal_period)),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdIndicator> {
    calculate_macd(candles, 12, 26, 9)
}
