//! Pullback entry timing on the finest timeframe

use crate::config::EntryParams;
use crate::indicators::momentum::calculate_rsi;
use crate::models::candle::Candle;
use crate::models::signal::{Classification, EntryStatus};

pub struct EntryEvaluator {
    rsi_period: u32,
    params: EntryParams,
}

impl EntryEvaluator {
    pub fn new(rsi_period: u32, params: EntryParams) -> Self {
        Self { rsi_period, params }
    }

    /// WAIT when the series is missing or too short for an RSI reading.
    pub fn evaluate(&self, candles: Option<&[Candle]>, trend: Classification) -> EntryStatus {
        candles
            .and_then(|candles| calculate_rsi(candles, self.rsi_period))
            .map(|rsi| self.evaluate_rsi(rsi.value, trend))
            .unwrap_or(EntryStatus::Wait)
    }

    /// In an uptrend an oversold dip is READY and an overbought stretch is
    /// WAIT; a downtrend mirrors this. Readings between the bands fall back to
    /// `ready_in_neutral_zone`.
    pub fn evaluate_rsi(&self, rsi: f64, trend: Classification) -> EntryStatus {
        let EntryParams {
            oversold,
            overbought,
            ready_in_neutral_zone,
        } = self.params;

        match trend {
            Classification::Bullish if rsi < oversold => return EntryStatus::Ready,
            Classification::Bullish if rsi > overbought => return EntryStatus::Wait,
            Classification::Bearish if rsi > overbought => return EntryStatus::Ready,
            Classification::Bearish if rsi < oversold => return EntryStatus::Wait,
            _ => {}
        }

        if ready_in_neutral_zone {
            EntryStatus::Ready
        } else {
            EntryStatus::Wait
        }
    }
}
