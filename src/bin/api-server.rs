//! Trendgate API Server
//!
//! HTTP API exposing on-demand multi-timeframe analysis, health and metrics.

use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use trendgate::config::{ServiceConfig, TradingConfig};
use trendgate::core::bootstrap::build_analysis_service;
use trendgate::core::http::{start_server, AppState};
use trendgate::logging;
use trendgate::metrics::Metrics;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let service = ServiceConfig::from_env();
    let trading = TradingConfig::from_env();

    let env = trendgate::config::get_environment();
    info!("Starting Trendgate API Server");
    info!(environment = %env, "Environment");
    info!(port = service.port, "HTTP Server: http://0.0.0.0:{}", service.port);

    let metrics = Arc::new(Metrics::new()?);
    let analysis = Arc::new(build_analysis_service(trading, &service, Some(metrics.clone())).await);
    let state = AppState::new(analysis, metrics);

    let port = service.port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, state).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
