//! Kline client for `GET /api/v3/klines`.

use crate::models::candle::{validate_series, Candle};
use crate::models::timeframe::Timeframe;
use crate::services::error::MarketDataError;
use crate::services::market_data::MarketDataProvider;
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

pub struct BinanceClient {
    base_url: String,
    http: reqwest::Client,
    retry_attempts: usize,
    retry_base_delay: Duration,
}

impl BinanceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            retry_attempts: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }

    /// Retries after the first attempt, starting at `base_delay` and
    /// doubling.
    pub fn with_retry(mut self, attempts: usize, base_delay: Duration) -> Self {
        self.retry_attempts = attempts;
        self.retry_base_delay = base_delay;
        self
    }

    /// Klines for an exchange symbol (e.g. `BTCUSDT`), retried on transient
    /// failures.
    pub async fn get_klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.retry_base_delay)
            .with_max_times(self.retry_attempts);

        (|| self.get_klines_once(symbol, interval, limit))
            .retry(backoff)
            .when(MarketDataError::is_retryable)
            .notify(|err: &MarketDataError, delay: Duration| {
                warn!(
                    symbol = %symbol,
                    interval = %interval,
                    error = %err,
                    delay_ms = delay.as_millis() as u64,
                    "Binance: retrying klines request"
                );
            })
            .await
    }

    async fn get_klines_once(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let limit = limit.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[("symbol", symbol), ("interval", interval), ("limit", limit.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| MarketDataError::Decode(e.to_string()))?;
        let candles = parse_klines(&body)?;
        debug!(
            symbol = %symbol,
            interval = %interval,
            count = candles.len(),
            "Binance: received {} klines",
            candles.len()
        );
        Ok(candles)
    }
}

#[async_trait]
impl MarketDataProvider for BinanceClient {
    async fn fetch_series(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        self.get_klines(&normalize_symbol(symbol), timeframe.as_str(), limit)
            .await
    }
}

/// `BTC/USDT`, `btc-usdt` and `BTCUSDT` all map to `BTCUSDT`.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn number_at(row: &[Value], index: usize) -> Option<f64> {
    match row.get(index)? {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Decode kline rows `[openTimeMs, open, high, low, close, volume, ...]`,
/// rejecting malformed bars and non-increasing timestamps.
pub fn parse_klines(body: &Value) -> Result<Vec<Candle>, MarketDataError> {
    let rows = body
        .as_array()
        .ok_or_else(|| MarketDataError::Decode("klines response is not an array".to_string()))?;

    let mut candles = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let fields = row
            .as_array()
            .ok_or_else(|| MarketDataError::Decode(format!("kline {} is not an array", i)))?;
        let timestamp = fields
            .first()
            .and_then(Value::as_i64)
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .ok_or_else(|| MarketDataError::Decode(format!("kline {} has no open time", i)))?;

        let values: Option<Vec<f64>> = (1..=5).map(|idx| number_at(fields, idx)).collect();
        let values =
            values.ok_or_else(|| MarketDataError::Decode(format!("kline {} has bad OHLCV fields", i)))?;
        candles.push(Candle::new(
            values[0], values[1], values[2], values[3], values[4], timestamp,
        ));
    }

    validate_series(&candles).map_err(|index| {
        MarketDataError::InvalidData(format!("kline {} violates bar invariants or ordering", index))
    })?;
    Ok(candles)
}
