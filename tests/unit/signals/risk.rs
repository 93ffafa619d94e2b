//! Unit tests for ATR-based risk levels

use trendgate::config::RiskParams;
use trendgate::models::signal::Classification;
use trendgate::signals::risk::{risk_reward_ratio, RiskCalculator};

#[test]
fn long_levels_from_atr() {
    let calculator = RiskCalculator::new(RiskParams::default());
    let levels = calculator.calculate(100.0, Classification::Bullish, 2.0).unwrap();

    assert!((levels.stop_loss - 97.0).abs() < 1e-9);
    assert!((levels.take_profit - 106.0).abs() < 1e-9);
    assert!((levels.risk_reward_ratio - 2.0).abs() < 1e-9);
    assert!(calculator.is_acceptable(&levels));
}

#[test]
fn short_levels_mirror() {
    let calculator = RiskCalculator::new(RiskParams::default());
    let levels = calculator.calculate(100.0, Classification::Bearish, 2.0).unwrap();

    assert!((levels.stop_loss - 103.0).abs() < 1e-9);
    assert!((levels.take_profit - 94.0).abs() < 1e-9);
}

#[test]
fn neutral_direction_has_no_levels() {
    let calculator = RiskCalculator::new(RiskParams::default());
    assert!(calculator.calculate(100.0, Classification::Neutral, 2.0).is_none());
}

#[test]
fn minimum_is_inclusive() {
    let strict = RiskCalculator::new(RiskParams {
        min_risk_reward: 2.5,
        ..RiskParams::default()
    });
    let levels = strict.calculate(100.0, Classification::Bullish, 2.0).unwrap();

    assert!(!strict.is_acceptable(&levels));
    assert_eq!(strict.min_risk_reward(), 2.5);
}

#[test]
fn ratio_guards_zero_risk() {
    assert_eq!(risk_reward_ratio(100.0, 100.0, 110.0), 0.0);
    assert!((risk_reward_ratio(100.0, 95.0, 115.0) - 3.0).abs() < 1e-12);
}

#[test]
fn default_minimum_holds_for_fractional_prices() {
    let calculator = RiskCalculator::new(RiskParams::default());

    for (entry, atr) in [(0.3137, 0.0026), (1.0731, 0.0043), (27.91, 0.37), (64_213.7, 311.9)] {
        for direction in [Classification::Bullish, Classification::Bearish] {
            let levels = calculator.calculate(entry, direction, atr).unwrap();
            assert!(
                calculator.is_acceptable(&levels),
                "entry {} atr {} {:?} gave {}",
                entry,
                atr,
                direction,
                levels.risk_reward_ratio
            );
            let from_levels = risk_reward_ratio(entry, levels.stop_loss, levels.take_profit);
            assert!((from_levels - levels.risk_reward_ratio).abs() < 1e-6);
        }
    }
}

#[test]
fn zero_atr_gives_zero_ratio() {
    let calculator = RiskCalculator::new(RiskParams::default());
    let levels = calculator.calculate(100.0, Classification::Bullish, 0.0).unwrap();

    assert_eq!(levels.risk_reward_ratio, 0.0);
    assert!(!calculator.is_acceptable(&levels));
}
