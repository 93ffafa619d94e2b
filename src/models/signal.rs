//! Trade signal output types.

use crate::models::timeframe::Timeframe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Buy,
    Sell,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Directional label produced by the trend and momentum classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    Bullish,
    Bearish,
    Neutral,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Bullish => "BULLISH",
            Classification::Bearish => "BEARISH",
            Classification::Neutral => "NEUTRAL",
        }
    }

    pub fn is_directional(&self) -> bool {
        !matches!(self, Classification::Neutral)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryStatus {
    Ready,
    Wait,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Ready => "READY",
            EntryStatus::Wait => "WAIT",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final recommendation of one `analyze` call.
///
/// Fields are private so a signal cannot be altered once built; every price
/// field is zero when the direction is neutral.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeSignal {
    symbol: String,
    direction: SignalDirection,
    confidence: Confidence,
    entry_price: f64,
    stop_loss: f64,
    take_profit: f64,
    risk_reward_ratio: f64,
    reasons: Vec<String>,
    timeframes: BTreeMap<Timeframe, String>,
    created_at: DateTime<Utc>,
}

/// Levels attached to a directional signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeLevels {
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk_reward_ratio: f64,
}

impl TradeSignal {
    pub fn neutral(
        symbol: impl Into<String>,
        reasons: Vec<String>,
        timeframes: BTreeMap<Timeframe, String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            direction: SignalDirection::Neutral,
            confidence: Confidence::Low,
            entry_price: 0.0,
            stop_loss: 0.0,
            take_profit: 0.0,
            risk_reward_ratio: 0.0,
            reasons,
            timeframes,
            created_at,
        }
    }

    /// Builds a BUY or SELL signal. Returns `None` when the levels are not
    /// ordered the way the direction requires.
    pub fn directional(
        symbol: impl Into<String>,
        direction: SignalDirection,
        confidence: Confidence,
        levels: TradeLevels,
        reasons: Vec<String>,
        timeframes: BTreeMap<Timeframe, String>,
        created_at: DateTime<Utc>,
    ) -> Option<Self> {
        let TradeLevels {
            entry_price,
            stop_loss,
            take_profit,
            risk_reward_ratio,
        } = levels;
        let ordered = match direction {
            SignalDirection::Buy => stop_loss < entry_price && entry_price < take_profit,
            SignalDirection::Sell => take_profit < entry_price && entry_price < stop_loss,
            SignalDirection::Neutral => false,
        };
        if !ordered {
            return None;
        }

        Some(Self {
            symbol: symbol.into(),
            direction,
            confidence,
            entry_price,
            stop_loss,
            take_profit,
            risk_reward_ratio,
            reasons,
            timeframes,
            created_at,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn direction(&self) -> SignalDirection {
        self.direction
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn entry_price(&self) -> f64 {
        self.entry_price
    }

    pub fn stop_loss(&self) -> f64 {
        self.stop_loss
    }

    pub fn take_profit(&self) -> f64 {
        self.take_profit
    }

    pub fn risk_reward_ratio(&self) -> f64 {
        self.risk_reward_ratio
    }

    /// Human-readable reasons in the order the cascade produced them.
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// Classification string recorded for each evaluated timeframe.
    pub fn timeframes(&self) -> &BTreeMap<Timeframe, String> {
        &self.timeframes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
