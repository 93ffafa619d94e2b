//! RSI + MACD agreement momentum classifier

use crate::config::IndicatorParams;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::models::candle::Candle;
use crate::models::signal::Classification;

const RSI_MIDLINE: f64 = 50.0;

pub struct MomentumClassifier {
    rsi_period: u32,
    macd_fast: u32,
    macd_slow: u32,
    macd_signal: u32,
}

impl MomentumClassifier {
    pub fn new(params: &IndicatorParams) -> Self {
        Self {
            rsi_period: params.rsi_period,
            macd_fast: params.macd_fast,
            macd_slow: params.macd_slow,
            macd_signal: params.macd_signal,
        }
    }

    /// Readings that cannot be formed yet classify as NEUTRAL.
    pub fn classify(&self, candles: &[Candle]) -> Classification {
        let rsi = calculate_rsi(candles, self.rsi_period);
        let macd = calculate_macd(candles, self.macd_fast, self.macd_slow, self.macd_signal);
        match (rsi, macd) {
            (Some(rsi), Some(macd)) => classify_readings(rsi.value, macd.macd, macd.signal),
            _ => Classification::Neutral,
        }
    }
}

/// +1 for RSI above 50, +1 for the MACD line above its signal line.
pub fn momentum_score(rsi: f64, macd_line: f64, signal_line: f64) -> u8 {
    u8::from(rsi > RSI_MIDLINE) + u8::from(macd_line > signal_line)
}

pub fn classify_readings(rsi: f64, macd_line: f64, signal_line: f64) -> Classification {
    match momentum_score(rsi, macd_line, signal_line) {
        2 => Classification::Bullish,
        0 => Classification::Bearish,
        _ => Classification::Neutral,
    }
}
