//! Price / oscillator divergence detection

use serde::Serialize;

/// Bars between the extremum and the reading it is compared against.
const COMPARISON_OFFSET: usize = 5;
/// Maximum distance between a price extremum and its indicator extremum.
const ALIGNMENT_WINDOW: usize = 5;
/// Only the most recent extrema are examined.
const RECENT_EXTREMA: usize = 5;

/// A divergence between the price extremum at `price_index` and the indicator
/// reading at `indicator_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Divergence {
    pub price_index: usize,
    pub indicator_index: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Divergences {
    pub bullish: Vec<Divergence>,
    pub bearish: Vec<Divergence>,
}

impl Divergences {
    pub fn is_empty(&self) -> bool {
        self.bullish.is_empty() && self.bearish.is_empty()
    }
}

#[derive(Clone, Copy)]
enum Extremum {
    Peak,
    Trough,
}

impl Extremum {
    /// `a` is beyond `b` in this extremum's direction.
    fn beyond(self, a: f64, b: f64) -> bool {
        match self {
            Extremum::Peak => a > b,
            Extremum::Trough => a < b,
        }
    }
}

/// Local extrema of a series.
///
/// Interior bars qualify when strictly beyond both neighbours; the final bar
/// qualifies when strictly beyond its predecessor. Undefined values never
/// qualify and break adjacency.
fn find_extrema(values: &[Option<f64>], kind: Extremum) -> Vec<usize> {
    let n = values.len();
    (1..n)
        .filter(|&i| {
            let (Some(current), Some(prev)) = (values[i], values[i - 1]) else {
                return false;
            };
            if !kind.beyond(current, prev) {
                return false;
            }
            match values.get(i + 1) {
                Some(Some(next)) => kind.beyond(current, *next),
                Some(None) => false,
                None => true,
            }
        })
        .collect()
}

fn last_n(indices: Vec<usize>, count: usize) -> Vec<usize> {
    let skip = indices.len().saturating_sub(count);
    indices.into_iter().skip(skip).collect()
}

fn detect(price: &[f64], indicator: &[Option<f64>], lookback: usize, kind: Extremum) -> Vec<Divergence> {
    let start = price.len().saturating_sub(lookback);
    let price_series: Vec<Option<f64>> = price.iter().copied().map(Some).collect();

    let in_window = |indices: Vec<usize>| -> Vec<usize> {
        last_n(indices.into_iter().filter(|&i| i >= start).collect(), RECENT_EXTREMA)
    };
    let price_extrema = in_window(find_extrema(&price_series, kind));
    let indicator_extrema = in_window(find_extrema(indicator, kind));

    // Indicator made a less extreme reading than five bars before.
    let indicator_fails = |at: usize| -> bool {
        if at < COMPARISON_OFFSET {
            return false;
        }
        match (
            indicator.get(at).copied().flatten(),
            indicator.get(at - COMPARISON_OFFSET).copied().flatten(),
        ) {
            (Some(now), Some(before)) => kind.beyond(before, now),
            _ => false,
        }
    };

    let mut found = Vec::new();
    for &p in &price_extrema {
        if p < COMPARISON_OFFSET || !kind.beyond(price[p], price[p - COMPARISON_OFFSET]) {
            continue;
        }

        let aligned: Vec<usize> = indicator_extrema
            .iter()
            .copied()
            .filter(|&ip| ip.abs_diff(p) < ALIGNMENT_WINDOW)
            .collect();

        if aligned.is_empty() {
            if indicator_fails(p) {
                found.push(Divergence {
                    price_index: p,
                    indicator_index: p,
                });
            }
            continue;
        }

        found.extend(aligned.into_iter().filter(|&ip| indicator_fails(ip)).map(|ip| {
            Divergence {
                price_index: p,
                indicator_index: ip,
            }
        }));
    }
    found
}

/// Detect bullish and bearish divergences over the trailing `lookback` bars.
///
/// Bearish: a recent price peak above the close five bars earlier while the
/// aligned indicator peak is below its own reading five bars earlier.
/// Bullish is the mirrored trough case. When no indicator extremum lies
/// within the alignment window, the indicator reading at the price extremum
/// is used.
pub fn detect_divergence(price: &[f64], indicator: &[Option<f64>], lookback: usize) -> Divergences {
    if price.len() != indicator.len() || price.is_empty() {
        return Divergences::default();
    }

    Divergences {
        bullish: detect(price, indicator, lookback, Extremum::Trough),
        bearish: detect(price, indicator, lookback, Extremum::Peak),
    }
}

/// Divergence detection with the default lookback (20)
pub fn detect_divergence_default(price: &[f64], indicator: &[Option<f64>]) -> Divergences {
    detect_divergence(price, indicator, 20)
}
