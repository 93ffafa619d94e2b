//! Wiring of the production collaborators.

use crate::config::{ServiceConfig, TradingConfig};
use crate::core::analysis::AnalysisService;
use crate::metrics::Metrics;
use crate::services::binance::BinanceClient;
use crate::services::cache::{CachedMarketDataProvider, CandleCache, InMemoryCache, RedisCache};
use crate::models::sentiment::SentimentScore;
use crate::services::sentiment::{FixedSentiment, NeutralSentiment, SentimentProvider};
use std::sync::Arc;
use tracing::{info, warn};

/// `FixedSentiment` from `sentiment_score` when set, neutral otherwise.
pub fn sentiment_provider(service: &ServiceConfig) -> Arc<dyn SentimentProvider> {
    match service.sentiment_score {
        Some(score) => {
            info!(score = score, "using fixed sentiment score");
            Arc::new(FixedSentiment(SentimentScore::from_score(
                score,
                "Configured via SENTIMENT_SCORE",
            )))
        }
        None => Arc::new(NeutralSentiment),
    }
}

/// Binance behind a Redis cache when `redis_url` is set and reachable,
/// otherwise behind an in-process cache.
pub async fn build_analysis_service(
    trading: TradingConfig,
    service: &ServiceConfig,
    metrics: Option<Arc<Metrics>>,
) -> AnalysisService {
    let client = BinanceClient::new(service.binance_base_url.clone())
        .with_retry(service.retry_attempts, service.retry_base_delay());

    let cache: Arc<dyn CandleCache> = match &service.redis_url {
        Some(url) => match RedisCache::connect(url).await {
            Ok(cache) => {
                info!("Redis candle cache connected");
                Arc::new(cache)
            }
            Err(e) => {
                warn!(error = %e, "Redis unavailable, falling back to in-memory cache");
                Arc::new(InMemoryCache::new())
            }
        },
        None => Arc::new(InMemoryCache::new()),
    };

    let provider = Arc::new(CachedMarketDataProvider::new(client, cache));
    let analysis = AnalysisService::new(trading, provider, sentiment_provider(service))
        .with_fetch_timeout(service.fetch_timeout());

    match metrics {
        Some(metrics) => analysis.with_metrics(metrics),
        None => analysis,
    }
}
