//! Stochastic oscillator (slow %K / %D)

use crate::common::math;
use crate::indicators::series::{self, Series};
use crate::indicators::trend::sma::sma_series;
use crate::models::candle::Candle;
use crate::models::indicators::StochasticIndicator;

#[derive(Debug, Clone)]
pub struct StochasticSeries {
    pub k: Series,
    pub d: Series,
}

/// Fast %K = (close - lowest low) / (highest high - lowest low) * 100 over
/// `k_period` bars, 0 for a flat window.
/// Slow %K = SMA(fast %K, slowing)
/// %D = SMA(slow %K, d_period)
///
/// Both lines start at bar `(k_period - 1) + (slowing - 1) + (d_period - 1)`.
pub fn stochastic(
    candles: &[Candle],
    k_period: usize,
    slowing: usize,
    d_period: usize,
) -> StochasticSeries {
    let n = candles.len();
    let mut result = StochasticSeries {
        k: series::undefined(n),
        d: series::undefined(n),
    };
    if k_period == 0 || slowing == 0 || d_period == 0 || n < k_period {
        return result;
    }

    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();

    let mut fast_k = series::undefined(n);
    for i in (k_period - 1)..n {
        let window = i + 1 - k_period..=i;
        let (Some(highest), Some(lowest)) = (
            math::highest(&highs[window.clone()]),
            math::lowest(&lows[window]),
        ) else {
            continue;
        };
        let range = highest - lowest;
        fast_k[i] = Some(if range == 0.0 {
            0.0
        } else {
            (candles[i].close - lowest) / range * 100.0
        });
    }

    let slow_k = sma_series(&fast_k, slowing);
    let d = sma_series(&slow_k, d_period);
    for (i, value) in d.iter().enumerate() {
        if value.is_some() {
            result.k[i] = slow_k[i];
            result.d[i] = *value;
        }
    }
    result
}

/// Latest reading, with `d_period` used for both the slowing and %D SMAs.
pub fn calculate_stochastic(
    candles: &[Candle],
    k_period: u32,
    d_period: u32,
) -> Option<StochasticIndicator> {
    let lines = stochastic(candles, k_period as usize, d_period as usize, d_period as usize);
    Some(StochasticIndicator {
        k: series::latest(&lines.k)?,
        d: series::latest(&lines.d)?,
        k_period,
        d_period,
    })
}

/// Calculate Stochastic with default periods (14, 3)
pub fn calculate_stochastic_default(candles: &[Candle]) -> Option<StochasticIndicator> {
    calculate_stochastic(candles, 14, 3)
}
