//! VWAP (Volume Weighted Average Price) indicator

use crate::indicators::series::Series;
use crate::models::candle::Candle;

/// Cumulative typical-price volume over cumulative volume across the whole
/// supplied window. No session reset; undefined until some volume traded.
pub fn vwap(candles: &[Candle]) -> Series {
    let mut price_volume = 0.0;
    let mut volume = 0.0;

    candles
        .iter()
        .map(|candle| {
            price_volume += candle.typical_price() * candle.volume;
            volume += candle.volume;
            (volume > 0.0).then(|| price_volume / volume)
        })
        .collect()
}
