//! Numeric kernels shared by the indicator implementations.

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.max(0.0).sqrt())
}

/// max(high - low, |high - prev_close|, |low - prev_close|)
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Wilder's recursive average: (prev * (period - 1) + current) / period.
pub fn wilder_average(prev: f64, current: f64, period: usize) -> f64 {
    (prev * (period as f64 - 1.0) + current) / period as f64
}

/// Wilder's running sum: prev - prev / period + current.
pub fn wilder_sum(prev: f64, current: f64, period: usize) -> f64 {
    prev - prev / period as f64 + current
}

/// EMA smoothing factor 2 / (period + 1).
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One EMA step: prev + alpha * (value - prev).
pub fn ema_from_previous(value: f64, prev: f64, period: usize) -> f64 {
    prev + ema_alpha(period) * (value - prev)
}

/// Highest value in a window. `None` when empty.
pub fn highest(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Lowest value in a window. `None` when empty.
pub fn lowest(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Sample standard deviation (n - 1 denominator). `None` below two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.max(0.0).sqrt())
}

/// Linear-interpolated percentile, `q` in [0, 100]. `None` when empty.
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = q.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}
