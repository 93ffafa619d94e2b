//! Fractal high/low detection

use crate::indicators::series::{self, Series};

#[derive(Debug, Clone)]
pub struct Fractals {
    pub highs: Series,
    pub lows: Series,
}

impl Fractals {
    pub fn high_indices(&self) -> Vec<usize> {
        defined_indices(&self.highs)
    }

    pub fn low_indices(&self) -> Vec<usize> {
        defined_indices(&self.lows)
    }
}

fn defined_indices(values: &[Option<f64>]) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|_| i))
        .collect()
}

/// Bar `i` is a fractal high (low) when it is the strict maximum (minimum)
/// of the `2 * lookback + 1` bars centred on it. The first and last
/// `lookback` bars can never qualify.
pub fn detect_fractals(values: &[f64], lookback: usize) -> Fractals {
    let n = values.len();
    let mut fractals = Fractals {
        highs: series::undefined(n),
        lows: series::undefined(n),
    };
    if n < 2 * lookback + 1 {
        return fractals;
    }

    for i in lookback..(n - lookback) {
        let window = (i - lookback)..=(i + lookback);
        let neighbours = move || {
            window
                .clone()
                .filter(move |&j| j != i)
                .map(move |j| values[j])
        };

        if neighbours().all(|v| v < values[i]) {
            fractals.highs[i] = Some(values[i]);
        }
        if neighbours().all(|v| v > values[i]) {
            fractals.lows[i] = Some(values[i]);
        }
    }
    fractals
}
