//! Test utilities for API server integration tests

use axum_test::TestServer;
use std::sync::Arc;
use trendgate::config::TradingConfig;
use trendgate::core::analysis::AnalysisService;
use trendgate::core::http::{create_router, AppState};
use trendgate::metrics::Metrics;
use trendgate::models::timeframe::{Timeframe, TimeframeSet};
use trendgate::services::{NeutralSentiment, StaticMarketDataProvider};

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
}

impl TestApiServer {
    /// Serves every symbol from `data`.
    pub async fn with_data(data: TimeframeSet) -> Self {
        let provider = Timeframe::ALL
            .iter()
            .fold(StaticMarketDataProvider::new(), |provider, &timeframe| {
                match data.get(timeframe) {
                    Some(candles) => provider.with_series(timeframe, candles.to_vec()),
                    None => provider,
                }
            });

        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let analysis = AnalysisService::new(
            TradingConfig::default(),
            Arc::new(provider),
            Arc::new(NeutralSentiment),
        )
        .with_metrics(metrics.clone());

        let state = AppState::new(Arc::new(analysis), metrics.clone());
        let server = TestServer::new(create_router(state)).expect("start test server");

        Self { server, metrics }
    }

    pub async fn new() -> Self {
        Self::with_data(TimeframeSet::new()).await
    }
}
