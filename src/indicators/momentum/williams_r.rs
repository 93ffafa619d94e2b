//! Williams %R indicator

use crate::common::math;
use crate::indicators::series::{self, Series};
use crate::models::candle::Candle;

/// (highest high - close) / (highest high - lowest low) * -100 over the
/// trailing `period` bars. A flat window reads 0.
pub fn williams_r(candles: &[Candle], period: usize) -> Series {
    let mut out = series::undefined(candles.len());
    if period == 0 || candles.len() < period {
        return out;
    }

    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();

    for i in (period - 1)..candles.len() {
        let window = i + 1 - period..=i;
        let (Some(highest), Some(lowest)) = (
            math::highest(&highs[window.clone()]),
            math::lowest(&lows[window]),
        ) else {
            continue;
        };
        let range = highest - lowest;
        out[i] = Some(if range == 0.0 {
            0.0
        } else {
            (highest - candles[i].close) / range * -100.0
        });
    }
    out
}
