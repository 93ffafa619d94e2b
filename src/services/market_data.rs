//! Market data provider interface and the per-timeframe fetch fan-out.

use crate::config::TradingConfig;
use crate::metrics::Metrics;
use crate::models::candle::Candle;
use crate::models::timeframe::{Timeframe, TimeframeSet};
use crate::services::error::MarketDataError;
use async_trait::async_trait;
use futures_util::future::join_all;
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Up to `limit` most recent bars of `symbol` on `timeframe`, oldest first.
    async fn fetch_series(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError>;
}

/// Fetch every configured timeframe concurrently.
///
/// A failed or timed-out timeframe is logged and left out of the set; it is
/// never retried here and never fails the whole fetch.
pub async fn fetch_timeframe_set(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    config: &TradingConfig,
    timeout: Duration,
    metrics: Option<&Metrics>,
) -> TimeframeSet {
    let requests = config.timeframes.iter().map(|spec| async move {
        let result = match tokio::time::timeout(
            timeout,
            provider.fetch_series(symbol, spec.timeframe, spec.limit),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(MarketDataError::Timeout(timeout)),
        };
        (spec.timeframe, result)
    });

    let mut data = TimeframeSet::new();
    for (timeframe, result) in join_all(requests).await {
        match result {
            Ok(candles) => {
                debug!(
                    symbol = %symbol,
                    timeframe = %timeframe,
                    count = candles.len(),
                    "fetched {} candles",
                    candles.len()
                );
                data.insert(timeframe, candles);
            }
            Err(e) => {
                warn!(
                    symbol = %symbol,
                    timeframe = %timeframe,
                    error = %e,
                    "failed to fetch {} for {}",
                    timeframe,
                    symbol
                );
                if let Some(metrics) = metrics {
                    metrics
                        .timeframe_fetch_failures_total
                        .with_label_values(&[timeframe.as_str()])
                        .inc();
                }
            }
        }
    }
    data
}

/// Serves fixed series from memory, regardless of symbol.
#[derive(Debug, Clone, Default)]
pub struct StaticMarketDataProvider {
    series: HashMap<Timeframe, Vec<Candle>>,
    failing: HashSet<Timeframe>,
}

impl StaticMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, timeframe: Timeframe, candles: Vec<Candle>) -> Self {
        self.series.insert(timeframe, candles);
        self
    }

    /// Requests for this timeframe fail.
    pub fn with_failure(mut self, timeframe: Timeframe) -> Self {
        self.failing.insert(timeframe);
        self
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn fetch_series(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        if self.failing.contains(&timeframe) {
            return Err(MarketDataError::Status {
                status: 503,
                url: format!("static://{}/{}", symbol, timeframe),
            });
        }
        let candles = self
            .series
            .get(&timeframe)
            .ok_or_else(|| MarketDataError::NotFound(format!("{} {}", symbol, timeframe)))?;
        let skip = candles.len().saturating_sub(limit);
        Ok(candles[skip..].to_vec())
    }
}
