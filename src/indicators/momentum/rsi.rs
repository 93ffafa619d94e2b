//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::indicators::series::{self, Series};
use crate::models::candle::{closes, Candle};
use crate::models::indicators::RsiIndicator;

/// RSI with Wilder-smoothed average gain and loss.
///
/// RSI = 100 - (100 / (1 + RS)), RS = Average Gain / Average Loss.
/// The first value sits at index `period`, seeded with the plain mean of the
/// first `period` changes. An average loss of zero yields 100.
pub fn rsi(values: &[f64], period: usize) -> Series {
    let mut out = series::undefined(values.len());
    if period == 0 || values.len() <= period {
        return out;
    }

    let changes: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let gain = |change: f64| change.max(0.0);
    let loss = |change: f64| (-change).max(0.0);

    let mut avg_gain = changes[..period].iter().map(|c| gain(*c)).sum::<f64>() / period as f64;
    let mut avg_loss = changes[..period].iter().map(|c| loss(*c)).sum::<f64>() / period as f64;
    out[period] = Some(rsi_value(avg_gain, avg_loss));

    for i in (period + 1)..values.len() {
        let change = changes[i - 1];
        avg_gain = math::wilder_average(avg_gain, gain(change), period);
        avg_loss = math::wilder_average(avg_loss, loss(change), period);
        out[i] = Some(rsi_value(avg_gain, avg_loss));
    }
    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Latest RSI of closing prices
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Option<RsiIndicator> {
    let value = series::latest(&rsi(&closes(candles), period as usize))?;
    Some(RsiIndicator {
        value,
        period: Some(period),
    })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Option<RsiIndicator> {
    calculate_rsi(candles, 14)
}
