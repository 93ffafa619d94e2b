//! CCI (Commodity Channel Index) indicator

use crate::common::math;
use crate::indicators::series::{self, Series};
use crate::models::candle::Candle;

const LAMBERT_CONSTANT: f64 = 0.015;

/// (typical price - SMA) / (0.015 * mean absolute deviation), over the
/// trailing `period` typical prices. Zero deviation reads 0.
pub fn cci(candles: &[Candle], period: usize) -> Series {
    let mut out = series::undefined(candles.len());
    if period == 0 || candles.len() < period {
        return out;
    }

    let typical: Vec<f64> = candles.iter().map(Candle::typical_price).collect();
    for i in (period - 1)..typical.len() {
        let window = &typical[i + 1 - period..=i];
        let Some(avg) = math::mean(window) else {
            continue;
        };
        let mean_deviation =
            window.iter().map(|tp| (tp - avg).abs()).sum::<f64>() / period as f64;
        let distance = typical[i] - avg;

        out[i] = Some(if mean_deviation == 0.0 || distance == 0.0 {
            0.0
        } else {
            distance / (LAMBERT_CONSTANT * mean_deviation)
        });
    }
    out
}

/// Latest CCI
pub fn calculate_cci(candles: &[Candle], period: u32) -> Option<f64> {
    series::latest(&cci(candles, period as usize))
}
