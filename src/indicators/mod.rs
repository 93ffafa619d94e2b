//! Technical indicator library.
//!
//! Every series function returns one element per input bar, `None` until the
//! indicator's lookback is satisfied. Inputs are never mutated.

pub mod series;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use series::{latest, Series};
