//! Unit tests for the market profile

use trendgate::indicators::structure::market_profile;

#[test]
fn test_market_profile_bins_and_value_area() {
    let prices: Vec<f64> = (1..=10).map(f64::from).collect();
    let profile = market_profile(&prices, 3).unwrap();

    // top bin holds 7..=10
    assert_eq!(profile.distribution, vec![3, 3, 4]);
    assert!((profile.poc - 8.5).abs() < 1e-9);
    assert!((profile.value_area_high - 8.2).abs() < 1e-9);
    assert!((profile.value_area_low - 2.8).abs() < 1e-9);
}

#[test]
fn test_market_profile_single_price() {
    let profile = market_profile(&[5.0, 5.0, 5.0], 4).unwrap();

    assert_eq!(profile.distribution, vec![0, 0, 3, 0]);
    assert!((profile.poc - 5.125).abs() < 1e-9);
    assert_eq!(profile.value_area_high, 5.0);
    assert_eq!(profile.value_area_low, 5.0);
}

#[test]
fn test_market_profile_tie_takes_lowest_bin() {
    let profile = market_profile(&[1.0, 1.0, 3.0, 3.0], 2).unwrap();
    assert_eq!(profile.distribution, vec![2, 2]);
    assert!((profile.poc - 1.5).abs() < 1e-9);
}

#[test]
fn test_market_profile_degenerate_inputs() {
    assert!(market_profile(&[], 20).is_none());
    assert!(market_profile(&[1.0, 2.0], 0).is_none());
    assert!(market_profile(&[f64::NAN], 5).is_none());
}
