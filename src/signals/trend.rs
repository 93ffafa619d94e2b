//! Moving-average ordering trend classifier

use crate::config::IndicatorParams;
use crate::indicators::trend::calculate_sma;
use crate::models::candle::Candle;
use crate::models::signal::Classification;

pub struct TrendClassifier {
    fast_period: u32,
    slow_period: u32,
}

impl TrendClassifier {
    pub fn new(params: &IndicatorParams) -> Self {
        Self {
            fast_period: params.trend_fast_ma,
            slow_period: params.trend_slow_ma,
        }
    }

    /// BULLISH when close > fast SMA > slow SMA, BEARISH when fully
    /// inverted. Too little history to form both averages reads NEUTRAL.
    pub fn classify(&self, candles: &[Candle]) -> Classification {
        let Some(close) = candles.last().map(|c| c.close) else {
            return Classification::Neutral;
        };
        match (
            calculate_sma(candles, self.fast_period),
            calculate_sma(candles, self.slow_period),
        ) {
            (Some(fast), Some(slow)) => classify_levels(close, fast, slow),
            _ => Classification::Neutral,
        }
    }
}

pub fn classify_levels(close: f64, fast_ma: f64, slow_ma: f64) -> Classification {
    if close > fast_ma && fast_ma > slow_ma {
        Classification::Bullish
    } else if close < fast_ma && fast_ma < slow_ma {
        Classification::Bearish
    } else {
        Classification::Neutral
    }
}
