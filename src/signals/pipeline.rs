//! Gated top-down cascade across timeframes.
//!
//! Each gate reads the timeframe set, appends to the shared
//! [`PipelineState`] and either lets the cascade continue or ends it with a
//! neutral outcome. Gates run once, in [`Stage::ORDER`], with no loop-back.

use crate::config::{SentimentThresholds, TradingConfig};
use crate::indicators::volatility::calculate_atr;
use crate::models::sentiment::SentimentScore;
use crate::models::signal::{Classification, Confidence, EntryStatus};
use crate::models::timeframe::{Timeframe, TimeframeSet};
use crate::signals::entry::EntryEvaluator;
use crate::signals::momentum::MomentumClassifier;
use crate::signals::risk::{RiskCalculator, RiskLevels};
use crate::signals::trend::TrendClassifier;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    TrendGate,
    MomentumGate,
    ConfirmationGate,
    EntryGate,
    RiskGate,
    SentimentAdjust,
}

impl Stage {
    pub const ORDER: [Stage; 6] = [
        Stage::TrendGate,
        Stage::MomentumGate,
        Stage::ConfirmationGate,
        Stage::EntryGate,
        Stage::RiskGate,
        Stage::SentimentAdjust,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::TrendGate => "trend_gate",
            Stage::MomentumGate => "momentum_gate",
            Stage::ConfirmationGate => "confirmation_gate",
            Stage::EntryGate => "entry_gate",
            Stage::RiskGate => "risk_gate",
            Stage::SentimentAdjust => "sentiment_adjust",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Continue,
    Exit,
}

/// Everything the cascade has learned so far.
#[derive(Debug, Clone)]
pub struct PipelineState {
    pub main_trend: Classification,
    pub reasons: Vec<String>,
    pub timeframes: BTreeMap<Timeframe, String>,
    pub entry_price: Option<f64>,
    pub risk: Option<RiskLevels>,
    pub confidence: Confidence,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            main_trend: Classification::Neutral,
            reasons: Vec::new(),
            timeframes: BTreeMap::new(),
            entry_price: None,
            risk: None,
            confidence: Confidence::Low,
        }
    }
}

impl PipelineState {
    fn record(&mut self, timeframe: Timeframe, label: &str) {
        self.timeframes.insert(timeframe, label.to_string());
    }

    fn reason(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }
}

pub struct SignalPipeline {
    trend: TrendClassifier,
    momentum: MomentumClassifier,
    entry: EntryEvaluator,
    risk: RiskCalculator,
    atr_period: u32,
    sentiment: SentimentThresholds,
}

impl SignalPipeline {
    pub fn new(config: &TradingConfig) -> Self {
        Self {
            trend: TrendClassifier::new(&config.indicators),
            momentum: MomentumClassifier::new(&config.indicators),
            entry: EntryEvaluator::new(config.indicators.rsi_period, config.entry.clone()),
            risk: RiskCalculator::new(config.risk.clone()),
            atr_period: config.indicators.atr_period,
            sentiment: config.sentiment.clone(),
        }
    }

    pub fn run_stage(
        &self,
        stage: Stage,
        data: &TimeframeSet,
        sentiment: &SentimentScore,
        state: &mut PipelineState,
    ) -> GateOutcome {
        match stage {
            Stage::TrendGate => self.trend_gate(data, state),
            Stage::MomentumGate => self.momentum_gate(data, state),
            Stage::ConfirmationGate => self.confirmation_gate(data, state),
            Stage::EntryGate => self.entry_gate(data, state),
            Stage::RiskGate => self.risk_gate(data, state),
            Stage::SentimentAdjust => self.sentiment_adjust(sentiment, state),
        }
    }

    fn classify_trend(&self, data: &TimeframeSet, timeframe: Timeframe) -> Classification {
        data.get(timeframe)
            .map(|candles| self.trend.classify(candles))
            .unwrap_or(Classification::Neutral)
    }

    fn classify_momentum(&self, data: &TimeframeSet, timeframe: Timeframe) -> Classification {
        data.get(timeframe)
            .map(|candles| self.momentum.classify(candles))
            .unwrap_or(Classification::Neutral)
    }

    /// Monthly and Weekly must agree for a directional main trend. Never exits.
    pub fn trend_gate(&self, data: &TimeframeSet, state: &mut PipelineState) -> GateOutcome {
        let monthly = self.classify_trend(data, Timeframe::Monthly);
        let weekly = self.classify_trend(data, Timeframe::Weekly);
        state.record(Timeframe::Monthly, monthly.as_str());
        state.record(Timeframe::Weekly, weekly.as_str());

        state.main_trend = if monthly == weekly {
            monthly
        } else {
            Classification::Neutral
        };
        state.reason(format!("Main Trend (M/W): {}", state.main_trend));
        GateOutcome::Continue
    }

    /// Daily momentum must match the main trend. A neutral main trend has no
    /// direction to trade and ends the cascade here.
    pub fn momentum_gate(&self, data: &TimeframeSet, state: &mut PipelineState) -> GateOutcome {
        let daily = self.classify_momentum(data, Timeframe::Daily);
        state.record(Timeframe::Daily, daily.as_str());

        if !state.main_trend.is_directional() {
            state.reason("No aligned Monthly/Weekly trend");
            return GateOutcome::Exit;
        }
        if daily != state.main_trend {
            state.reason(format!(
                "Daily momentum {} contradicts {} trend",
                daily, state.main_trend
            ));
            return GateOutcome::Exit;
        }

        state.reason(format!("Daily momentum: {}", daily));
        GateOutcome::Continue
    }

    /// Both 4h and 1h momentum must match the main trend.
    pub fn confirmation_gate(&self, data: &TimeframeSet, state: &mut PipelineState) -> GateOutcome {
        let four_hour = self.classify_momentum(data, Timeframe::FourHour);
        let one_hour = self.classify_momentum(data, Timeframe::OneHour);
        state.record(Timeframe::FourHour, four_hour.as_str());
        state.record(Timeframe::OneHour, one_hour.as_str());

        if four_hour != state.main_trend || one_hour != state.main_trend {
            state.reason(format!(
                "4h/1h confirmation ({}/{}) does not agree with {} trend",
                four_hour, one_hour, state.main_trend
            ));
            return GateOutcome::Exit;
        }

        state.reason(format!("4h/1h confirmation: {}/{}", four_hour, one_hour));
        GateOutcome::Continue
    }

    /// 15m pullback timing must be READY.
    pub fn entry_gate(&self, data: &TimeframeSet, state: &mut PipelineState) -> GateOutcome {
        let status = self
            .entry
            .evaluate(data.get(Timeframe::FifteenMinute), state.main_trend);
        state.record(Timeframe::FifteenMinute, status.as_str());

        if status != EntryStatus::Ready {
            state.reason(format!("15m entry: {}", status));
            return GateOutcome::Exit;
        }

        state.entry_price = data
            .get(Timeframe::FifteenMinute)
            .and_then(|candles| candles.last())
            .map(|candle| candle.close);
        state.reason(format!("15m entry: {}", status));
        GateOutcome::Continue
    }

    /// Stop and target from the 15m ATR; the reward/risk must reach the
    /// configured minimum.
    pub fn risk_gate(&self, data: &TimeframeSet, state: &mut PipelineState) -> GateOutcome {
        let atr = data
            .get(Timeframe::FifteenMinute)
            .and_then(|candles| calculate_atr(candles, self.atr_period));
        let (Some(entry), Some(atr)) = (state.entry_price, atr) else {
            state.reason("ATR unavailable on 15m");
            return GateOutcome::Exit;
        };

        let Some(levels) = self.risk.calculate(entry, state.main_trend, atr.value) else {
            state.reason("No direction for risk calculation");
            return GateOutcome::Exit;
        };
        if !self.risk.is_acceptable(&levels) {
            state.reason(format!("Poor R:R ({:.2})", levels.risk_reward_ratio));
            return GateOutcome::Exit;
        }

        state.reason(format!(
            "R:R {:.2} (SL {:.4}, TP {:.4})",
            levels.risk_reward_ratio, levels.stop_loss, levels.take_profit
        ));
        state.risk = Some(levels);
        GateOutcome::Continue
    }

    /// Sentiment against the trend lowers confidence; it never exits.
    pub fn sentiment_adjust(&self, sentiment: &SentimentScore, state: &mut PipelineState) -> GateOutcome {
        let diverges = match state.main_trend {
            Classification::Bullish => sentiment.score() < self.sentiment.bearish_below,
            Classification::Bearish => sentiment.score() > self.sentiment.bullish_above,
            Classification::Neutral => false,
        };

        if diverges {
            state.confidence = Confidence::Low;
            state.reason(format!(
                "Sentiment Divergence: {} ({:.1})",
                sentiment.label(),
                sentiment.score()
            ));
        } else {
            state.confidence = Confidence::High;
        }
        state.reason(format!("Sentiment: {} ({:.1})", sentiment.label(), sentiment.score()));
        GateOutcome::Continue
    }
}
