//! TTL cache for fetched candle series.

use crate::models::candle::Candle;
use crate::models::timeframe::Timeframe;
use crate::services::binance::normalize_symbol;
use crate::services::error::MarketDataError;
use crate::services::market_data::MarketDataProvider;
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, warn};

#[async_trait]
pub trait CandleCache: Send + Sync {
    /// Cached bars, `None` on a miss or an expired entry.
    async fn get(&self, key: &str) -> Result<Option<Vec<Candle>>, MarketDataError>;

    async fn set(&self, key: &str, candles: &[Candle], ttl: Duration) -> Result<(), MarketDataError>;
}

/// `klines:{SYMBOL}:{interval}:{limit}`
pub fn cache_key(symbol: &str, timeframe: Timeframe, limit: usize) -> String {
    format!(
        "klines:{}:{}:{}",
        normalize_symbol(symbol),
        timeframe.as_str(),
        limit
    )
}

struct CacheEntry {
    candles: Vec<Candle>,
    expires_at: Instant,
}

/// Process-local cache. Expired entries are evicted when read.
#[derive(Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CandleCache for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<Candle>>, MarketDataError> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if Instant::now() < entry.expires_at => {
                    return Ok(Some(entry.candles.clone()));
                }
                Some(_) => {}
                None => return Ok(None),
            }
        }

        self.entries.write().await.remove(key);
        Ok(None)
    }

    async fn set(&self, key: &str, candles: &[Candle], ttl: Duration) -> Result<(), MarketDataError> {
        let entry = CacheEntry {
            candles: candles.to_vec(),
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }
}

/// Redis-backed cache storing JSON-encoded series with `SET EX`.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
}

impl RedisCache {
    pub async fn connect(url: &str) -> Result<Self, MarketDataError> {
        let client = redis::Client::open(url).map_err(|e| MarketDataError::Cache(e.to_string()))?;
        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| MarketDataError::Cache(e.to_string()))?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl CandleCache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<Candle>>, MarketDataError> {
        let mut connection = self.connection.clone();
        let raw: Option<String> = connection
            .get(key)
            .await
            .map_err(|e| MarketDataError::Cache(e.to_string()))?;

        raw.map(|payload| {
            serde_json::from_str(&payload).map_err(|e| MarketDataError::Cache(e.to_string()))
        })
        .transpose()
    }

    async fn set(&self, key: &str, candles: &[Candle], ttl: Duration) -> Result<(), MarketDataError> {
        let payload =
            serde_json::to_string(candles).map_err(|e| MarketDataError::Cache(e.to_string()))?;
        let mut connection = self.connection.clone();
        let _: () = connection
            .set_ex(key, payload, ttl.as_secs().max(1))
            .await
            .map_err(|e| MarketDataError::Cache(e.to_string()))?;
        Ok(())
    }
}

/// Read-through cache in front of another provider.
///
/// Cache failures are logged and treated as misses; TTLs follow
/// [`Timeframe::cache_ttl_seconds`].
pub struct CachedMarketDataProvider<P> {
    inner: P,
    cache: Arc<dyn CandleCache>,
}

impl<P> CachedMarketDataProvider<P> {
    pub fn new(inner: P, cache: Arc<dyn CandleCache>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl<P: MarketDataProvider> MarketDataProvider for CachedMarketDataProvider<P> {
    async fn fetch_series(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let key = cache_key(symbol, timeframe, limit);

        match self.cache.get(&key).await {
            Ok(Some(candles)) => {
                debug!(key = %key, "cache hit");
                return Ok(candles);
            }
            Ok(None) => debug!(key = %key, "cache miss"),
            Err(e) => warn!(key = %key, error = %e, "cache read failed"),
        }

        let candles = self.inner.fetch_series(symbol, timeframe, limit).await?;
        let ttl = Duration::from_secs(timeframe.cache_ttl_seconds());
        if let Err(e) = self.cache.set(&key, &candles, ttl).await {
            warn!(key = %key, error = %e, "cache write failed");
        }
        Ok(candles)
    }
}
