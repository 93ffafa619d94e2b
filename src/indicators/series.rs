//! Indicator output sequences with an explicit undefined marker.

/// One value per input bar; `None` where the lookback is not yet satisfied.
pub type Series = Vec<Option<f64>>;

/// A series of `len` undefined values.
pub fn undefined(len: usize) -> Series {
    vec![None; len]
}

/// Value at the final bar, `None` if that bar is undefined.
pub fn latest(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten()
}

/// Index of the first defined element.
pub fn first_defined(series: &[Option<f64>]) -> Option<usize> {
    series.iter().position(Option::is_some)
}

/// Combine two aligned series element-wise where both are defined.
pub fn zip_with(a: &[Option<f64>], b: &[Option<f64>], f: impl Fn(f64, f64) -> f64) -> Series {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(f(*x, *y)),
            _ => None,
        })
        .collect()
}
