//! Process configuration.
//!
//! Loaded once at startup (environment variables over defaults) and passed by
//! value into every component constructor.

use crate::models::timeframe::Timeframe;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Deployment environment name (`ENVIRONMENT`, default `sandbox`).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Indicator periods used by the classifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub rsi_period: u32,
    pub macd_fast: u32,
    pub macd_slow: u32,
    pub macd_signal: u32,
    pub bb_period: u32,
    pub bb_std_dev: f64,
    pub atr_period: u32,
    pub trend_fast_ma: u32,
    pub trend_slow_ma: u32,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bb_period: 20,
            bb_std_dev: 2.0,
            atr_period: 14,
            trend_fast_ma: 50,
            trend_slow_ma: 200,
        }
    }
}

/// RSI bands for the pullback entry rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryParams {
    pub oversold: f64,
    pub overbought: f64,
    /// Whether an RSI strictly between the bands counts as READY.
    pub ready_in_neutral_zone: bool,
}

impl Default for EntryParams {
    fn default() -> Self {
        Self {
            oversold: 40.0,
            overbought: 60.0,
            ready_in_neutral_zone: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskParams {
    /// Signals below this reward/risk are rejected; equal passes.
    pub min_risk_reward: f64,
    pub atr_stop_multiplier: f64,
    /// Take-profit distance as a multiple of the stop distance.
    pub reward_multiple: f64,
}

impl Default for RiskParams {
    fn default() -> Self {
        Self {
            min_risk_reward: 2.0,
            atr_stop_multiplier: 1.5,
            reward_multiple: 2.0,
        }
    }
}

/// Sentiment scores beyond these contradict the prevailing trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentThresholds {
    pub bearish_below: f64,
    pub bullish_above: f64,
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self {
            bearish_below: -2.0,
            bullish_above: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeSpec {
    pub timeframe: Timeframe,
    pub limit: usize,
}

/// Trading parameters of the signal pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingConfig {
    pub symbols: Vec<String>,
    pub timeframes: Vec<TimeframeSpec>,
    pub indicators: IndicatorParams,
    pub entry: EntryParams,
    pub risk: RiskParams,
    pub sentiment: SentimentThresholds,
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            symbols: vec![
                "BTC/USDT".to_string(),
                "ETH/USDT".to_string(),
                "SOL/USDT".to_string(),
            ],
            timeframes: Timeframe::ALL
                .iter()
                .map(|&timeframe| TimeframeSpec {
                    timeframe,
                    limit: timeframe.default_limit(),
                })
                .collect(),
            indicators: IndicatorParams::default(),
            entry: EntryParams::default(),
            risk: RiskParams::default(),
            sentiment: SentimentThresholds::default(),
        }
    }
}

impl TradingConfig {
    /// Defaults overridden by `SYMBOLS` (comma separated), `MIN_RISK_REWARD`
    /// and `ATR_STOP_MULTIPLIER`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(symbols) = env::var("SYMBOLS") {
            let parsed: Vec<String> = symbols
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !parsed.is_empty() {
                config.symbols = parsed;
            }
        }
        config.risk.min_risk_reward = env_or("MIN_RISK_REWARD", config.risk.min_risk_reward);
        config.risk.atr_stop_multiplier =
            env_or("ATR_STOP_MULTIPLIER", config.risk.atr_stop_multiplier);
        config
    }

    /// Configured history limit for a timeframe.
    pub fn limit_for(&self, timeframe: Timeframe) -> usize {
        self.timeframes
            .iter()
            .find(|spec| spec.timeframe == timeframe)
            .map(|spec| spec.limit)
            .unwrap_or_else(|| timeframe.default_limit())
    }
}

/// Settings of the running service around the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub port: u16,
    pub binance_base_url: String,
    pub redis_url: Option<String>,
    pub fetch_timeout_seconds: u64,
    pub analysis_interval_minutes: u64,
    pub retry_attempts: usize,
    pub retry_base_delay_ms: u64,
    /// Fixed sentiment score reported for every symbol; neutral when unset.
    pub sentiment_score: Option<f64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            binance_base_url: "https://api.binance.com".to_string(),
            redis_url: None,
            fetch_timeout_seconds: 10,
            analysis_interval_minutes: 15,
            retry_attempts: 3,
            retry_base_delay_ms: 500,
            sentiment_score: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_or("PORT", defaults.port),
            binance_base_url: env::var("BINANCE_BASE_URL").unwrap_or(defaults.binance_base_url),
            redis_url: env::var("REDIS_URL").ok().filter(|url| !url.is_empty()),
            fetch_timeout_seconds: env_or("FETCH_TIMEOUT_SECONDS", defaults.fetch_timeout_seconds),
            analysis_interval_minutes: env_or(
                "ANALYSIS_INTERVAL_MINUTES",
                defaults.analysis_interval_minutes,
            ),
            retry_attempts: env_or("RETRY_ATTEMPTS", defaults.retry_attempts),
            retry_base_delay_ms: env_or("RETRY_BASE_DELAY_MS", defaults.retry_base_delay_ms),
            sentiment_score: env::var("SENTIMENT_SCORE")
                .ok()
                .and_then(|raw| raw.trim().parse::<f64>().ok())
                .filter(|score| score.is_finite()),
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }
}
