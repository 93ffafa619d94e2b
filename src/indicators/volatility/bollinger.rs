//! Bollinger Bands indicator

use crate::common::math;
use crate::indicators::series::{self, Series};
use crate::models::candle::{closes, Candle};
use crate::models::indicators::BollingerBandsIndicator;

#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
}

/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// Standard deviation is the population deviation of the same window.
pub fn bollinger_bands(values: &[f64], period: usize, std_dev: f64) -> BollingerSeries {
    let n = values.len();
    let mut bands = BollingerSeries {
        upper: series::undefined(n),
        middle: series::undefined(n),
        lower: series::undefined(n),
    };
    if period == 0 || n < period {
        return bands;
    }

    for i in (period - 1)..n {
        let window = &values[i + 1 - period..=i];
        let (Some(middle), Some(sigma)) = (math::mean(window), math::population_std_dev(window)) else {
            continue;
        };
        bands.middle[i] = Some(middle);
        bands.upper[i] = Some(middle + std_dev * sigma);
        bands.lower[i] = Some(middle - std_dev * sigma);
    }
    bands
}

/// Latest Bollinger Bands of closing prices
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: u32,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    let bands = bollinger_bands(&closes(candles), period as usize, std_dev);
    Some(BollingerBandsIndicator {
        upper: series::latest(&bands.upper)?,
        middle: series::latest(&bands.middle)?,
        lower: series::latest(&bands.lower)?,
        period,
        std_dev,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(candles: &[Candle]) -> Option<BollingerBandsIndicator> {
    calculate_bollinger_bands(candles, 20, 2.0)
}
