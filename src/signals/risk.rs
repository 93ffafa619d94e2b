//! ATR-based stop-loss / take-profit calculation

use crate::config::RiskParams;
use crate::models::signal::Classification;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskLevels {
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk_reward_ratio: f64,
}

pub struct RiskCalculator {
    params: RiskParams,
}

impl RiskCalculator {
    pub fn new(params: RiskParams) -> Self {
        Self { params }
    }

    pub fn min_risk_reward(&self) -> f64 {
        self.params.min_risk_reward
    }

    /// Stop at `atr * multiplier` against the trade, target at
    /// `reward_multiple` times that distance with it. No levels for a
    /// neutral direction.
    pub fn calculate(&self, entry: f64, direction: Classification, atr: f64) -> Option<RiskLevels> {
        let stop_distance = atr * self.params.atr_stop_multiplier;
        let reward_distance = stop_distance * self.params.reward_multiple;

        let (stop_loss, take_profit) = match direction {
            Classification::Bullish => (entry - stop_distance, entry + reward_distance),
            Classification::Bearish => (entry + stop_distance, entry - reward_distance),
            Classification::Neutral => return None,
        };

        // From the distances, not the rounded levels.
        let risk_reward_ratio = if stop_distance == 0.0 {
            0.0
        } else {
            reward_distance.abs() / stop_distance.abs()
        };

        Some(RiskLevels {
            stop_loss,
            take_profit,
            risk_reward_ratio,
        })
    }

    /// The minimum itself is acceptable, within `RATIO_TOLERANCE`.
    pub fn is_acceptable(&self, levels: &RiskLevels) -> bool {
        levels.risk_reward_ratio + RATIO_TOLERANCE >= self.params.min_risk_reward
    }
}

/// Slack allowed below the minimum R:R for float rounding.
pub const RATIO_TOLERANCE: f64 = 1e-9;

/// |take_profit - entry| / |entry - stop_loss|, 0 for a zero stop distance.
pub fn risk_reward_ratio(entry: f64, stop_loss: f64, take_profit: f64) -> f64 {
    let risk = (entry - stop_loss).abs();
    if risk == 0.0 {
        return 0.0;
    }
    (take_profit - entry).abs() / risk
}
