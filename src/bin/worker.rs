//! Trendgate Worker
//!
//! Analyses the configured symbols on a fixed cron schedule and logs each
//! resulting signal.

use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use trendgate::config::{ServiceConfig, TradingConfig};
use trendgate::core::bootstrap::build_analysis_service;
use trendgate::core::scheduler::AnalysisScheduler;
use trendgate::logging;
use trendgate::metrics::Metrics;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let service = ServiceConfig::from_env();
    let trading = TradingConfig::from_env();
    let symbols = trading.symbols.clone();

    let env = trendgate::config::get_environment();
    info!("Starting Trendgate Worker");
    info!(environment = %env, "Environment");

    let metrics = Arc::new(Metrics::new()?);
    let analysis = Arc::new(build_analysis_service(trading, &service, Some(metrics)).await);

    let scheduler = AnalysisScheduler::new(analysis, symbols, service.analysis_interval_minutes)
        .map_err(|e| e.to_string())?;
    scheduler.start().await;

    info!("Worker started, waiting for shutdown signal...");
    signal::ctrl_c().await?;
    info!("Shutting down worker...");
    scheduler.stop().await;

    Ok(())
}
