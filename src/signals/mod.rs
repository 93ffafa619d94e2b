//! Multi-timeframe classification and signal composition.

pub mod engine;
pub mod entry;
pub mod momentum;
pub mod pipeline;
pub mod risk;
pub mod trend;

pub use engine::SignalEngine;
pub use entry::EntryEvaluator;
pub use momentum::MomentumClassifier;
pub use pipeline::{GateOutcome, PipelineState, SignalPipeline, Stage};
pub use risk::{RiskCalculator, RiskLevels};
pub use trend::TrendClassifier;
