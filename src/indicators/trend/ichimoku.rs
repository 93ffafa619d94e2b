//! Ichimoku cloud

use crate::common::math;
use crate::indicators::series::{self, Series};
use crate::models::candle::Candle;

#[derive(Debug, Clone)]
pub struct IchimokuSeries {
    pub tenkan_sen: Series,
    pub kijun_sen: Series,
    pub senkou_span_a: Series,
    pub senkou_span_b: Series,
    pub chikou_span: Series,
}

impl IchimokuSeries {
    /// Upper and lower cloud edge at bar `i`.
    pub fn cloud_at(&self, i: usize) -> Option<(f64, f64)> {
        let a = self.senkou_span_a.get(i).copied().flatten()?;
        let b = self.senkou_span_b.get(i).copied().flatten()?;
        Some((a.max(b), a.min(b)))
    }
}

/// Midpoint of the highest high and lowest low of the trailing `period` bars.
fn midpoint(candles: &[Candle], period: usize) -> Series {
    let mut out = series::undefined(candles.len());
    if period == 0 || candles.len() < period {
        return out;
    }

    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
    for i in (period - 1)..candles.len() {
        let window = i + 1 - period..=i;
        if let (Some(high), Some(low)) = (
            math::highest(&highs[window.clone()]),
            math::lowest(&lows[window]),
        ) {
            out[i] = Some((high + low) / 2.0);
        }
    }
    out
}

/// Value at `i` is the input's value at `i - offset`.
fn shift_forward(input: &[Option<f64>], offset: usize) -> Series {
    let mut out = series::undefined(input.len());
    for i in offset..input.len() {
        out[i] = input[i - offset];
    }
    out
}

/// Tenkan and kijun are the midpoints over their periods. Both senkou spans
/// are plotted `kijun_period` bars ahead and chikou `kijun_period` bars back,
/// so the last `kijun_period` chikou values are undefined.
pub fn ichimoku(
    candles: &[Candle],
    tenkan_period: usize,
    kijun_period: usize,
    senkou_b_period: usize,
) -> IchimokuSeries {
    let n = candles.len();
    let tenkan_sen = midpoint(candles, tenkan_period);
    let kijun_sen = midpoint(candles, kijun_period);
    let a = series::zip_with(&tenkan_sen, &kijun_sen, |t, k| (t + k) / 2.0);
    let b = midpoint(candles, senkou_b_period);

    let mut chikou_span = series::undefined(n);
    for i in 0..n.saturating_sub(kijun_period) {
        chikou_span[i] = Some(candles[i + kijun_period].close);
    }

    IchimokuSeries {
        senkou_span_a: shift_forward(&a, kijun_period),
        senkou_span_b: shift_forward(&b, kijun_period),
        tenkan_sen,
        kijun_sen,
        chikou_span,
    }
}

/// Ichimoku with the standard periods (9, 26, 52)
pub fn ichimoku_default(candles: &[Candle]) -> IchimokuSeries {
    ichimoku(candles, 9, 26, 52)
}
