//! Core application primitives (analysis service, HTTP surface, scheduler)

pub mod analysis;
pub mod bootstrap;
pub mod http;
pub mod scheduler;

pub use analysis::AnalysisService;
pub use http::{create_router, health_status, start_server, AppState};
pub use scheduler::AnalysisScheduler;
