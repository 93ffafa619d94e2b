//! ROC (Rate of Change) and the momentum score built on it

use crate::indicators::series::{self, Series};
use serde::Serialize;
use std::fmt;

/// (value / value `period` bars ago - 1) * 100. A zero base reads 0.
pub fn roc(values: &[f64], period: usize) -> Series {
    let mut out = series::undefined(values.len());
    if period == 0 || values.len() <= period {
        return out;
    }

    for i in period..values.len() {
        let base = values[i - period];
        out[i] = Some(if base == 0.0 {
            0.0
        } else {
            (values[i] / base - 1.0) * 100.0
        });
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MomentumStrength {
    StrongBullish,
    Bullish,
    Bearish,
    StrongBearish,
}

impl fmt::Display for MomentumStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MomentumStrength::StrongBullish => "STRONG BULLISH",
            MomentumStrength::Bullish => "BULLISH",
            MomentumStrength::Bearish => "BEARISH",
            MomentumStrength::StrongBearish => "STRONG BEARISH",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MomentumScore {
    /// Latest ROC in percent, 0 when undefined.
    pub value: f64,
    pub signal: MomentumStrength,
    /// |ROC| * 10, capped at 100.
    pub confidence: f64,
    pub description: String,
}

/// Grades the latest ROC: above 5% strong bullish, above 0 bullish, above
/// -5% bearish, otherwise strong bearish. A flat reading grades bearish.
pub fn momentum_score(values: &[f64], period: usize) -> MomentumScore {
    let value = series::latest(&roc(values, period)).unwrap_or(0.0);
    let (signal, description) = if value > 5.0 {
        (MomentumStrength::StrongBullish, "Momentum is strongly positive")
    } else if value > 0.0 {
        (MomentumStrength::Bullish, "Momentum is positive")
    } else if value > -5.0 {
        (MomentumStrength::Bearish, "Momentum is slightly negative")
    } else {
        (MomentumStrength::StrongBearish, "Momentum is strongly negative")
    };

    MomentumScore {
        value,
        signal,
        confidence: (value.abs() * 10.0).min(100.0),
        description: format!("{} ({:.2}%)", description, value),
    }
}
