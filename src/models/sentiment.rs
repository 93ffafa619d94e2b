use serde::{Deserialize, Serialize};
use std::fmt;

pub const SENTIMENT_SCORE_BOUND: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentLabel::Bullish => "BULLISH",
            SentimentLabel::Bearish => "BEARISH",
            SentimentLabel::Neutral => "NEUTRAL",
        };
        f.write_str(label)
    }
}

/// Externally supplied market sentiment, score in [-10, 10].
///
/// Deserialisation goes through `new`, so decoded scores are clamped too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSentimentScore")]
pub struct SentimentScore {
    label: SentimentLabel,
    score: f64,
    summary: String,
}

#[derive(Deserialize)]
struct RawSentimentScore {
    label: SentimentLabel,
    score: f64,
    #[serde(default)]
    summary: String,
}

impl From<RawSentimentScore> for SentimentScore {
    fn from(raw: RawSentimentScore) -> Self {
        Self::new(raw.label, raw.score, raw.summary)
    }
}

impl SentimentScore {
    pub fn new(label: SentimentLabel, score: f64, summary: impl Into<String>) -> Self {
        let score = if score.is_finite() {
            score.clamp(-SENTIMENT_SCORE_BOUND, SENTIMENT_SCORE_BOUND)
        } else {
            0.0
        };
        Self {
            label,
            score,
            summary: summary.into(),
        }
    }

    /// Label taken from the sign of the score.
    pub fn from_score(score: f64, summary: impl Into<String>) -> Self {
        let label = if score > 0.0 {
            SentimentLabel::Bullish
        } else if score < 0.0 {
            SentimentLabel::Bearish
        } else {
            SentimentLabel::Neutral
        };
        Self::new(label, score, summary)
    }

    pub fn neutral() -> Self {
        Self::new(SentimentLabel::Neutral, 0.0, "No data available")
    }

    pub fn label(&self) -> SentimentLabel {
        self.label
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::neutral()
    }
}
