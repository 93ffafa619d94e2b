//! Unit tests for full cascade runs through the signal engine

use crate::fixtures::{
    base_time, bearish_momentum_candles, bearish_set, bullish_set, candles_from_closes, linear,
};
use trendgate::config::TradingConfig;
use trendgate::models::sentiment::{SentimentLabel, SentimentScore};
use trendgate::models::signal::{Confidence, SignalDirection};
use trendgate::models::timeframe::{Timeframe, TimeframeSet};
use trendgate::signals::engine::SignalEngine;

fn engine() -> SignalEngine {
    SignalEngine::new(&TradingConfig::default())
}

fn neutral() -> SentimentScore {
    SentimentScore::neutral()
}

#[test]
fn fully_aligned_uptrend_buys() {
    let signal = engine().analyze_at("BTC/USDT", &bullish_set(), &neutral(), base_time());

    assert_eq!(signal.direction(), SignalDirection::Buy);
    assert_eq!(signal.confidence(), Confidence::High);
    assert_eq!(signal.symbol(), "BTC/USDT");
    assert_eq!(signal.entry_price(), 101.0);
    assert!((signal.stop_loss() - 98.0).abs() < 1e-9);
    assert!((signal.take_profit() - 107.0).abs() < 1e-9);
    assert!((signal.risk_reward_ratio() - 2.0).abs() < 1e-9);
    assert_eq!(signal.created_at(), base_time());
    assert_eq!(
        signal.reasons(),
        [
            "Main Trend (M/W): BULLISH",
            "Daily momentum: BULLISH",
            "4h/1h confirmation: BULLISH/BULLISH",
            "15m entry: READY",
            "R:R 2.00 (SL 98.0000, TP 107.0000)",
            "Sentiment: NEUTRAL (0.0)",
        ]
        .map(String::from)
    );

    let timeframes = signal.timeframes();
    assert_eq!(timeframes.len(), 6);
    assert_eq!(timeframes[&Timeframe::Monthly], "BULLISH");
    assert_eq!(timeframes[&Timeframe::OneHour], "BULLISH");
    assert_eq!(timeframes[&Timeframe::FifteenMinute], "READY");
}

#[test]
fn fully_aligned_downtrend_sells() {
    let signal = engine().analyze_at("ETH/USDT", &bearish_set(), &neutral(), base_time());

    assert_eq!(signal.direction(), SignalDirection::Sell);
    assert_eq!(signal.entry_price(), 101.0);
    assert!((signal.stop_loss() - 104.0).abs() < 1e-9);
    assert!((signal.take_profit() - 95.0).abs() < 1e-9);
    assert!(signal.take_profit() < signal.entry_price());
    assert!(signal.entry_price() < signal.stop_loss());
}

#[test]
fn daily_contradiction_is_neutral() {
    let data = bullish_set().with(Timeframe::Daily, bearish_momentum_candles());
    let signal = engine().analyze_at("BTC/USDT", &data, &neutral(), base_time());

    assert_eq!(signal.direction(), SignalDirection::Neutral);
    assert_eq!(signal.entry_price(), 0.0);
    assert_eq!(
        signal.reasons().last().unwrap(),
        "Daily momentum BEARISH contradicts BULLISH trend"
    );
    assert!(!signal.timeframes().contains_key(&Timeframe::FourHour));
}

#[test]
fn missing_higher_timeframes_is_neutral() {
    let mut data = TimeframeSet::new();
    for timeframe in [
        Timeframe::Daily,
        Timeframe::FourHour,
        Timeframe::OneHour,
        Timeframe::FifteenMinute,
    ] {
        if let Some(candles) = bullish_set().get(timeframe) {
            data.insert(timeframe, candles.to_vec());
        }
    }
    let signal = engine().analyze_at("BTC/USDT", &data, &neutral(), base_time());

    assert_eq!(signal.direction(), SignalDirection::Neutral);
    assert_eq!(signal.reasons()[0], "Main Trend (M/W): NEUTRAL");
    assert_eq!(signal.reasons().last().unwrap(), "No aligned Monthly/Weekly trend");
}

#[test]
fn no_data_at_all_is_neutral() {
    let signal = engine().analyze_at("BTC/USDT", &TimeframeSet::new(), &neutral(), base_time());

    assert_eq!(signal.direction(), SignalDirection::Neutral);
    assert_eq!(signal.reasons(), ["No market data available".to_string()]);
    assert!(signal.timeframes().is_empty());
}

#[test]
fn missing_entry_timeframe_waits() {
    let mut data = TimeframeSet::new();
    for timeframe in [
        Timeframe::Monthly,
        Timeframe::Weekly,
        Timeframe::Daily,
        Timeframe::FourHour,
        Timeframe::OneHour,
    ] {
        if let Some(candles) = bullish_set().get(timeframe) {
            data.insert(timeframe, candles.to_vec());
        }
    }
    let signal = engine().analyze_at("BTC/USDT", &data, &neutral(), base_time());

    assert_eq!(signal.direction(), SignalDirection::Neutral);
    assert_eq!(signal.timeframes()[&Timeframe::FifteenMinute], "WAIT");
}

#[test]
fn stretched_entry_waits() {
    let data = bullish_set().with(
        Timeframe::FifteenMinute,
        candles_from_closes(&linear(60, 100.0, 1.0)),
    );
    let signal = engine().analyze_at("BTC/USDT", &data, &neutral(), base_time());

    assert_eq!(signal.direction(), SignalDirection::Neutral);
    assert_eq!(signal.reasons().last().unwrap(), "15m entry: WAIT");
}

#[test]
fn poor_reward_to_risk_is_neutral() {
    let mut config = TradingConfig::default();
    config.risk.min_risk_reward = 3.0;
    let signal = SignalEngine::new(&config).analyze_at("BTC/USDT", &bullish_set(), &neutral(), base_time());

    assert_eq!(signal.direction(), SignalDirection::Neutral);
    assert_eq!(signal.reasons().last().unwrap(), "Poor R:R (2.00)");
}

#[test]
fn contrary_sentiment_keeps_direction_with_low_confidence() {
    let bearish = SentimentScore::new(SentimentLabel::Bearish, -5.0, "risk-off");
    let signal = engine().analyze_at("BTC/USDT", &bullish_set(), &bearish, base_time());

    assert_eq!(signal.direction(), SignalDirection::Buy);
    assert_eq!(signal.confidence(), Confidence::Low);
    assert!(signal
        .reasons()
        .contains(&"Sentiment Divergence: BEARISH (-5.0)".to_string()));
}

#[test]
fn analysis_is_deterministic() {
    let data = bullish_set();
    let first = engine().analyze_at("BTC/USDT", &data, &neutral(), base_time());
    let second = engine().analyze_at("BTC/USDT", &data, &neutral(), base_time());
    assert_eq!(first, second);
}
