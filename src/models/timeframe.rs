//! Timeframe labels and the per-timeframe series mapping.

use crate::models::candle::Candle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Fixed analysis timeframes, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1M")]
    Monthly,
    #[serde(rename = "1w")]
    Weekly,
    #[serde(rename = "1d")]
    Daily,
    #[serde(rename = "4h")]
    FourHour,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "15m")]
    FifteenMinute,
}

impl Timeframe {
    pub const ALL: [Timeframe; 6] = [
        Timeframe::Monthly,
        Timeframe::Weekly,
        Timeframe::Daily,
        Timeframe::FourHour,
        Timeframe::OneHour,
        Timeframe::FifteenMinute,
    ];

    /// Exchange interval code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Monthly => "1M",
            Timeframe::Weekly => "1w",
            Timeframe::Daily => "1d",
            Timeframe::FourHour => "4h",
            Timeframe::OneHour => "1h",
            Timeframe::FifteenMinute => "15m",
        }
    }

    /// Default number of bars requested per call.
    pub fn default_limit(&self) -> usize {
        match self {
            Timeframe::Monthly => 200,
            Timeframe::Weekly => 300,
            Timeframe::Daily => 1000,
            Timeframe::FourHour | Timeframe::OneHour | Timeframe::FifteenMinute => 500,
        }
    }

    /// How long fetched bars for this timeframe stay fresh in a cache.
    pub fn cache_ttl_seconds(&self) -> u64 {
        match self {
            Timeframe::FifteenMinute => 60,
            Timeframe::OneHour => 120,
            Timeframe::FourHour => 300,
            Timeframe::Daily | Timeframe::Weekly | Timeframe::Monthly => 600,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeframe::ALL
            .iter()
            .copied()
            .find(|tf| tf.as_str() == s)
            .ok_or_else(|| format!("unknown timeframe '{}'", s))
    }
}

/// Series per timeframe. A missing timeframe is a valid state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeframeSet {
    series: BTreeMap<Timeframe, Vec<Candle>>,
}

impl TimeframeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, timeframe: Timeframe, candles: Vec<Candle>) {
        self.series.insert(timeframe, candles);
    }

    pub fn with(mut self, timeframe: Timeframe, candles: Vec<Candle>) -> Self {
        self.insert(timeframe, candles);
        self
    }

    /// The series for a timeframe, `None` if absent or empty.
    pub fn get(&self, timeframe: Timeframe) -> Option<&[Candle]> {
        self.series
            .get(&timeframe)
            .map(Vec::as_slice)
            .filter(|candles| !candles.is_empty())
    }

    pub fn contains(&self, timeframe: Timeframe) -> bool {
        self.get(timeframe).is_some()
    }

    /// True when no timeframe carries any bars.
    pub fn is_empty(&self) -> bool {
        self.series.values().all(Vec::is_empty)
    }

    pub fn len(&self) -> usize {
        self.series.values().filter(|c| !c.is_empty()).count()
    }
}
