//! Annualised rolling volatility of log returns

use crate::common::math;
use crate::indicators::series::{self, Series};
use crate::models::candle::{closes, Candle};

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Sample standard deviation of the trailing `period` log returns, times
/// sqrt(252). The value at bar `i` uses the returns ending at `i`, so the
/// first defined bar is `period`. A non-positive price leaves every window
/// that touches it undefined.
pub fn rolling_volatility(values: &[f64], period: usize) -> Series {
    let n = values.len();
    let mut out = series::undefined(n);
    if period < 2 || n <= period {
        return out;
    }

    let returns: Vec<Option<f64>> = values
        .windows(2)
        .map(|w| (w[0] > 0.0 && w[1] > 0.0).then(|| (w[1] / w[0]).ln()))
        .collect();

    for i in period..n {
        let window: Option<Vec<f64>> = returns[i - period..i].iter().copied().collect();
        out[i] = window
            .and_then(|w| math::sample_std_dev(&w))
            .map(|sigma| sigma * TRADING_DAYS_PER_YEAR.sqrt());
    }
    out
}

/// Latest annualised volatility of closes
pub fn calculate_volatility(candles: &[Candle], period: u32) -> Option<f64> {
    series::latest(&rolling_volatility(&closes(candles), period as usize))
}
