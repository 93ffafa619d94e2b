//! One-symbol analysis: fetch fan-out, sentiment, then the signal engine.

use crate::config::TradingConfig;
use crate::metrics::Metrics;
use crate::models::sentiment::SentimentScore;
use crate::models::signal::{SignalDirection, TradeSignal};
use crate::services::market_data::{fetch_timeframe_set, MarketDataProvider};
use crate::services::sentiment::SentimentProvider;
use crate::signals::engine::SignalEngine;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Summary of the most recent completed analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    pub symbol: String,
    /// Timeframes that arrived with data.
    pub timeframes: usize,
    pub direction: SignalDirection,
    pub completed_at: DateTime<Utc>,
}

pub struct AnalysisService {
    config: TradingConfig,
    engine: SignalEngine,
    provider: Arc<dyn MarketDataProvider>,
    sentiment: Arc<dyn SentimentProvider>,
    fetch_timeout: Duration,
    metrics: Option<Arc<Metrics>>,
    last: RwLock<Option<AnalysisRecord>>,
}

impl AnalysisService {
    pub fn new(
        config: TradingConfig,
        provider: Arc<dyn MarketDataProvider>,
        sentiment: Arc<dyn SentimentProvider>,
    ) -> Self {
        Self {
            engine: SignalEngine::new(&config),
            config,
            provider,
            sentiment,
            fetch_timeout: Duration::from_secs(10),
            metrics: None,
            last: RwLock::new(None),
        }
    }

    /// Deadline applied to each timeframe fetch.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &TradingConfig {
        &self.config
    }

    pub async fn last_analysis(&self) -> Option<AnalysisRecord> {
        self.last.read().await.clone()
    }

    /// Fetch all timeframes and the sentiment concurrently, then compose the
    /// signal. Data or sentiment outages degrade the result; they never
    /// surface as errors.
    pub async fn analyze_symbol(&self, symbol: &str) -> TradeSignal {
        let started = Instant::now();

        let (data, sentiment) = tokio::join!(
            fetch_timeframe_set(
                self.provider.as_ref(),
                symbol,
                &self.config,
                self.fetch_timeout,
                self.metrics.as_deref(),
            ),
            self.sentiment.sentiment(symbol),
        );
        let sentiment = sentiment.unwrap_or_else(|e| {
            warn!(symbol = %symbol, error = %e, "sentiment unavailable, using neutral");
            SentimentScore::neutral()
        });

        let signal = self.engine.analyze(symbol, &data, &sentiment);

        let elapsed = started.elapsed();
        if let Some(metrics) = &self.metrics {
            metrics
                .signals_generated_total
                .with_label_values(&[direction_label(signal.direction())])
                .inc();
            metrics
                .analysis_duration_seconds
                .observe(elapsed.as_secs_f64());
        }
        info!(
            symbol = %symbol,
            timeframes = data.len(),
            direction = ?signal.direction(),
            duration_ms = elapsed.as_millis() as u64,
            "analysis complete"
        );

        *self.last.write().await = Some(AnalysisRecord {
            symbol: signal.symbol().to_string(),
            timeframes: data.len(),
            direction: signal.direction(),
            completed_at: Utc::now(),
        });
        signal
    }
}

fn direction_label(direction: SignalDirection) -> &'static str {
    match direction {
        SignalDirection::Buy => "buy",
        SignalDirection::Sell => "sell",
        SignalDirection::Neutral => "neutral",
    }
}
