//! ADX (Average Directional Index) indicator

use crate::common::math;
use crate::indicators::series::{self, Series};
use crate::models::candle::Candle;
use crate::models::indicators::AdxIndicator;

/// Aligned ADX, +DI and -DI series.
#[derive(Debug, Clone)]
pub struct AdxSeries {
    pub adx: Series,
    pub plus_di: Series,
    pub minus_di: Series,
}

/// Calculate ADX with Wilder smoothing.
///
/// TR, +DM and -DM are summed over bars `1..period`, then Wilder-summed from
/// bar `period`, where the DI lines start. ADX starts at bar `2 * period - 1`,
/// seeded with the mean of the first `period` DX values.
pub fn adx(candles: &[Candle], period: usize) -> AdxSeries {
    let n = candles.len();
    let mut result = AdxSeries {
        adx: series::undefined(n),
        plus_di: series::undefined(n),
        minus_di: series::undefined(n),
    };
    if period == 0 || n <= period {
        return result;
    }

    let mut tr = vec![0.0; n];
    let mut plus_dm = vec![0.0; n];
    let mut minus_dm = vec![0.0; n];
    for i in 1..n {
        tr[i] = math::true_range(candles[i].high, candles[i].low, candles[i - 1].close);
        let up = candles[i].high - candles[i - 1].high;
        let down = candles[i - 1].low - candles[i].low;
        if up > down && up > 0.0 {
            plus_dm[i] = up;
        }
        if down > up && down > 0.0 {
            minus_dm[i] = down;
        }
    }

    // Seeded with `period - 1` bars; bar `period` is the first Wilder step.
    let mut smoothed_tr: f64 = tr[1..period].iter().sum();
    let mut smoothed_plus: f64 = plus_dm[1..period].iter().sum();
    let mut smoothed_minus: f64 = minus_dm[1..period].iter().sum();

    let mut dx: Vec<Option<f64>> = vec![None; n];
    for i in period..n {
        smoothed_tr = math::wilder_sum(smoothed_tr, tr[i], period);
        smoothed_plus = math::wilder_sum(smoothed_plus, plus_dm[i], period);
        smoothed_minus = math::wilder_sum(smoothed_minus, minus_dm[i], period);

        if smoothed_tr <= 0.0 {
            result.plus_di[i] = Some(0.0);
            result.minus_di[i] = Some(0.0);
            continue;
        }
        let plus_di = 100.0 * smoothed_plus / smoothed_tr;
        let minus_di = 100.0 * smoothed_minus / smoothed_tr;
        result.plus_di[i] = Some(plus_di);
        result.minus_di[i] = Some(minus_di);

        let di_sum = plus_di + minus_di;
        if di_sum > 0.0 {
            dx[i] = Some(100.0 * (plus_di - minus_di).abs() / di_sum);
        }
    }

    let first_adx = 2 * period - 1;
    if n <= first_adx {
        return result;
    }

    // An undefined DX counts as 0 in the seed and leaves ADX unchanged after.
    let seed: f64 = dx[period..=first_adx].iter().flatten().sum();
    let mut prev = seed / period as f64;
    result.adx[first_adx] = Some(prev);
    for i in (first_adx + 1)..n {
        if let Some(value) = dx[i] {
            prev = math::wilder_average(prev, value, period);
        }
        result.adx[i] = Some(prev);
    }
    result
}

/// Latest ADX reading
pub fn calculate_adx(candles: &[Candle], period: u32) -> Option<AdxIndicator> {
    let lines = adx(candles, period as usize);
    Some(AdxIndicator {
        value: series::latest(&lines.adx)?,
        plus_di: series::latest(&lines.plus_di)?,
        minus_di: series::latest(&lines.minus_di)?,
        period,
    })
}

/// Calculate ADX with default period (14)
pub fn calculate_adx_default(candles: &[Candle]) -> Option<AdxIndicator> {
    calculate_adx(candles, 14)
}
