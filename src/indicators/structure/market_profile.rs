//! Price-distribution profile: point of control and value area

use crate::common::math;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketProfile {
    /// Midpoint of the most populated bin (the first one on a tie).
    pub poc: f64,
    /// 80th percentile of the prices.
    pub value_area_high: f64,
    /// 20th percentile of the prices.
    pub value_area_low: f64,
    /// Count per equal-width bin from the lowest to the highest price.
    pub distribution: Vec<usize>,
}

/// Histogram of `prices` over `bins` equal-width bins. The top bin includes
/// the highest price; a single-valued input spans `value ± 0.5`.
/// Non-finite prices are ignored.
pub fn market_profile(prices: &[f64], bins: usize) -> Option<MarketProfile> {
    let prices: Vec<f64> = prices.iter().copied().filter(|p| p.is_finite()).collect();
    if bins == 0 {
        return None;
    }
    let (mut low, mut high) = (math::lowest(&prices)?, math::highest(&prices)?);
    if low == high {
        low -= 0.5;
        high += 0.5;
    }

    let width = (high - low) / bins as f64;
    let mut distribution = vec![0usize; bins];
    for price in &prices {
        let bin = (((price - low) / width) as usize).min(bins - 1);
        distribution[bin] += 1;
    }

    let mut poc_bin = 0;
    for (i, count) in distribution.iter().enumerate() {
        if *count > distribution[poc_bin] {
            poc_bin = i;
        }
    }
    let poc = low + width * (poc_bin as f64 + 0.5);

    Some(MarketProfile {
        poc,
        value_area_high: math::percentile(&prices, 80.0)?,
        value_area_low: math::percentile(&prices, 20.0)?,
        distribution,
    })
}
