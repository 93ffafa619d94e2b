//! Unit tests for the individual cascade gates

use crate::fixtures::{
    bearish_momentum_candles, bullish_momentum_candles, bullish_set, candles_from_closes, linear,
    ranging_entry_candles, uptrend_candles,
};
use trendgate::config::TradingConfig;
use trendgate::models::sentiment::{SentimentLabel, SentimentScore};
use trendgate::models::signal::{Classification, Confidence};
use trendgate::models::timeframe::{Timeframe, TimeframeSet};
use trendgate::signals::pipeline::{GateOutcome, PipelineState, SignalPipeline, Stage};

fn pipeline() -> SignalPipeline {
    SignalPipeline::new(&TradingConfig::default())
}

fn bullish_state() -> PipelineState {
    PipelineState {
        main_trend: Classification::Bullish,
        ..PipelineState::default()
    }
}

#[test]
fn stage_order_is_fixed() {
    assert_eq!(
        Stage::ORDER,
        [
            Stage::TrendGate,
            Stage::MomentumGate,
            Stage::ConfirmationGate,
            Stage::EntryGate,
            Stage::RiskGate,
            Stage::SentimentAdjust,
        ]
    );
    assert_eq!(Stage::RiskGate.to_string(), "risk_gate");
}

#[test]
fn trend_gate_needs_monthly_and_weekly_agreement() {
    let mut state = PipelineState::default();
    let outcome = pipeline().trend_gate(&bullish_set(), &mut state);

    assert_eq!(outcome, GateOutcome::Continue);
    assert_eq!(state.main_trend, Classification::Bullish);
    assert_eq!(state.reasons, vec!["Main Trend (M/W): BULLISH".to_string()]);
    assert_eq!(state.timeframes[&Timeframe::Monthly], "BULLISH");
    assert_eq!(state.timeframes[&Timeframe::Weekly], "BULLISH");
}

#[test]
fn trend_gate_missing_weekly_is_neutral() {
    let data = TimeframeSet::new().with(Timeframe::Monthly, uptrend_candles());
    let mut state = PipelineState::default();

    assert_eq!(pipeline().trend_gate(&data, &mut state), GateOutcome::Continue);
    assert_eq!(state.main_trend, Classification::Neutral);
    assert_eq!(state.timeframes[&Timeframe::Weekly], "NEUTRAL");
}

#[test]
fn momentum_gate_exits_without_main_trend() {
    let data = TimeframeSet::new().with(Timeframe::Daily, bullish_momentum_candles());
    let mut state = PipelineState::default();

    assert_eq!(pipeline().momentum_gate(&data, &mut state), GateOutcome::Exit);
    assert_eq!(state.timeframes[&Timeframe::Daily], "BULLISH");
    assert_eq!(state.reasons.last().unwrap(), "No aligned Monthly/Weekly trend");
}

#[test]
fn momentum_gate_exits_on_contradiction() {
    let data = TimeframeSet::new().with(Timeframe::Daily, bearish_momentum_candles());
    let mut state = bullish_state();

    assert_eq!(pipeline().momentum_gate(&data, &mut state), GateOutcome::Exit);
    assert_eq!(
        state.reasons.last().unwrap(),
        "Daily momentum BEARISH contradicts BULLISH trend"
    );
}

#[test]
fn confirmation_gate_needs_both_intraday_timeframes() {
    let data = TimeframeSet::new()
        .with(Timeframe::FourHour, bullish_momentum_candles())
        .with(Timeframe::OneHour, bearish_momentum_candles());
    let mut state = bullish_state();

    assert_eq!(pipeline().confirmation_gate(&data, &mut state), GateOutcome::Exit);
    assert_eq!(
        state.reasons.last().unwrap(),
        "4h/1h confirmation (BULLISH/BEARISH) does not agree with BULLISH trend"
    );
}

#[test]
fn entry_gate_records_price_when_ready() {
    let data = TimeframeSet::new().with(Timeframe::FifteenMinute, ranging_entry_candles());
    let mut state = bullish_state();

    assert_eq!(pipeline().entry_gate(&data, &mut state), GateOutcome::Continue);
    assert_eq!(state.entry_price, Some(101.0));
    assert_eq!(state.timeframes[&Timeframe::FifteenMinute], "READY");
}

#[test]
fn entry_gate_waits_on_overbought_uptrend() {
    let stretched = candles_from_closes(&linear(60, 100.0, 1.0));
    let data = TimeframeSet::new().with(Timeframe::FifteenMinute, stretched);
    let mut state = bullish_state();

    assert_eq!(pipeline().entry_gate(&data, &mut state), GateOutcome::Exit);
    assert_eq!(state.timeframes[&Timeframe::FifteenMinute], "WAIT");
    assert!(state.entry_price.is_none());
}

#[test]
fn risk_gate_sets_levels() {
    let data = TimeframeSet::new().with(Timeframe::FifteenMinute, ranging_entry_candles());
    let mut state = PipelineState {
        entry_price: Some(101.0),
        ..bullish_state()
    };

    assert_eq!(pipeline().risk_gate(&data, &mut state), GateOutcome::Continue);
    let risk = state.risk.unwrap();
    assert!((risk.stop_loss - 98.0).abs() < 1e-9);
    assert!((risk.take_profit - 107.0).abs() < 1e-9);
    assert_eq!(
        state.reasons.last().unwrap(),
        "R:R 2.00 (SL 98.0000, TP 107.0000)"
    );
}

#[test]
fn risk_gate_exits_without_atr() {
    let short = candles_from_closes(&linear(10, 100.0, 1.0));
    let data = TimeframeSet::new().with(Timeframe::FifteenMinute, short);
    let mut state = PipelineState {
        entry_price: Some(109.0),
        ..bullish_state()
    };

    assert_eq!(pipeline().risk_gate(&data, &mut state), GateOutcome::Exit);
    assert_eq!(state.reasons.last().unwrap(), "ATR unavailable on 15m");
}

#[test]
fn sentiment_against_trend_lowers_confidence() {
    let bearish = SentimentScore::new(SentimentLabel::Bearish, -5.0, "risk-off");
    let mut state = bullish_state();

    assert_eq!(pipeline().sentiment_adjust(&bearish, &mut state), GateOutcome::Continue);
    assert_eq!(state.confidence, Confidence::Low);
    assert!(state
        .reasons
        .contains(&"Sentiment Divergence: BEARISH (-5.0)".to_string()));
}

#[test]
fn sentiment_at_threshold_keeps_high_confidence() {
    let mild = SentimentScore::new(SentimentLabel::Bearish, -2.0, "");
    let mut state = bullish_state();

    pipeline().sentiment_adjust(&mild, &mut state);
    assert_eq!(state.confidence, Confidence::High);
    assert_eq!(state.reasons, vec!["Sentiment: BEARISH (-2.0)".to_string()]);
}

#[test]
fn run_stage_dispatches() {
    let mut state = PipelineState::default();
    let outcome = pipeline().run_stage(
        Stage::TrendGate,
        &bullish_set(),
        &SentimentScore::neutral(),
        &mut state,
    );

    assert_eq!(outcome, GateOutcome::Continue);
    assert_eq!(state.main_trend, Classification::Bullish);
}
