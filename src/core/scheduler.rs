//! Cron-based scheduler for periodic symbol analysis

use crate::core::analysis::AnalysisService;
use cron::Schedule;
use futures_util::future::join_all;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Cron expression (with seconds field) firing every `interval_minutes`.
///
/// A `*/n` step restarts at every hour (day), so only divisors of 60 minutes
/// (24 hours) give an even cadence.
pub fn schedule_expression(
    interval_minutes: u64,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    match interval_minutes {
        0 => Err("Scheduler disabled: interval_minutes is 0".into()),
        m if 60 % m == 0 && m < 60 => Ok(format!("0 */{} * * * *", m)),
        m if m % 60 == 0 && 24 % (m / 60) == 0 && m < 24 * 60 => {
            Ok(format!("0 0 */{} * * *", m / 60))
        }
        m => Err(format!(
            "Unsupported interval {} minutes: use a divisor of 60 minutes or of 24 hours",
            m
        )
        .into()),
    }
}

/// Analyses every configured symbol on each cron tick and logs the result.
pub struct AnalysisScheduler {
    analysis: Arc<AnalysisService>,
    symbols: Vec<String>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl AnalysisScheduler {
    pub fn new(
        analysis: Arc<AnalysisService>,
        symbols: Vec<String>,
        interval_minutes: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let cron_expr = schedule_expression(interval_minutes)?;
        let schedule = Schedule::from_str(&cron_expr).map_err(|e| {
            format!("Invalid cron expression '{}': {}", cron_expr, e)
        })?;

        info!(
            interval_minutes = interval_minutes,
            cron = %cron_expr,
            symbols = ?symbols,
            "AnalysisScheduler: created with interval {}m (cron: {})",
            interval_minutes,
            cron_expr
        );

        Ok(Self {
            analysis,
            symbols,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Analyse all symbols once, concurrently.
    pub async fn run_once(analysis: &AnalysisService, symbols: &[String]) {
        let signals = join_all(symbols.iter().map(|symbol| analysis.analyze_symbol(symbol))).await;

        for signal in signals {
            match serde_json::to_string(&signal) {
                Ok(payload) => info!(
                    symbol = %signal.symbol(),
                    direction = ?signal.direction(),
                    confidence = ?signal.confidence(),
                    signal = %payload,
                    "AnalysisScheduler: signal for {}",
                    signal.symbol()
                ),
                Err(e) => warn!(symbol = %signal.symbol(), error = %e, "failed to encode signal"),
            }
        }
    }

    pub async fn start(&self) {
        let analysis = self.analysis.clone();
        let symbols = self.symbols.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("AnalysisScheduler: started, waiting for cron schedule...");

            loop {
                let Some(next_tick) = schedule.upcoming(chrono::Utc).next() else {
                    tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                    continue;
                };
                let now = chrono::Utc::now();
                if next_tick > now {
                    let duration = (next_tick - now).to_std().unwrap_or_default();
                    tokio::time::sleep(duration).await;
                }

                info!(
                    symbol_count = symbols.len(),
                    "AnalysisScheduler: cron tick, analysing {} symbols",
                    symbols.len()
                );
                Self::run_once(&analysis, &symbols).await;
            }
        });

        *self.handle.write().await = Some(handle);
        info!("AnalysisScheduler: started successfully");
    }

    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("AnalysisScheduler: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}
