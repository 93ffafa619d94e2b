//! CMF (Chaikin Money Flow) indicator

use crate::indicators::series::{self, Series};
use crate::models::candle::Candle;

/// Money flow volume of one bar; 0 when the bar has no range.
pub fn money_flow_volume(candle: &Candle) -> f64 {
    let range = candle.high - candle.low;
    if range == 0.0 {
        return 0.0;
    }
    ((candle.close - candle.low) - (candle.high - candle.close)) / range * candle.volume
}

/// Sum of money flow volume over sum of volume for the trailing `period` bars.
/// A window with no volume reads 0.
pub fn cmf(candles: &[Candle], period: usize) -> Series {
    let mut out = series::undefined(candles.len());
    if period == 0 || candles.len() < period {
        return out;
    }

    let flows: Vec<f64> = candles.iter().map(money_flow_volume).collect();
    for i in (period - 1)..candles.len() {
        let start = i + 1 - period;
        let flow: f64 = flows[start..=i].iter().sum();
        let volume: f64 = candles[start..=i].iter().map(|c| c.volume).sum();
        out[i] = Some(if volume == 0.0 { 0.0 } else { flow / volume });
    }
    out
}
