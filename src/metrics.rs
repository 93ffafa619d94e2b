//! Prometheus metrics for the analysis service and its HTTP surface.

use prometheus::{
    Encoder, Gauge, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub signals_generated_total: IntCounterVec,
    pub timeframe_fetch_failures_total: IntCounterVec,
    pub analysis_duration_seconds: Histogram,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: Gauge,
    pub http_request_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let signals_generated_total = IntCounterVec::new(
            Opts::new("signals_generated_total", "Trade signals produced, by direction"),
            &["direction"],
        )?;
        let timeframe_fetch_failures_total = IntCounterVec::new(
            Opts::new(
                "timeframe_fetch_failures_total",
                "Timeframe series that could not be fetched",
            ),
            &["timeframe"],
        )?;
        let analysis_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "analysis_duration_seconds",
            "Wall time of one symbol analysis including data fetch",
        ))?;
        let http_requests_total =
            IntCounter::new("http_requests_total", "HTTP requests handled")?;
        let http_requests_in_flight =
            Gauge::new("http_requests_in_flight", "HTTP requests being served")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency",
        ))?;

        registry.register(Box::new(signals_generated_total.clone()))?;
        registry.register(Box::new(timeframe_fetch_failures_total.clone()))?;
        registry.register(Box::new(analysis_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            signals_generated_total,
            timeframe_fetch_failures_total,
            analysis_duration_seconds,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
        })
    }

    /// Text exposition format.
    pub fn export(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
