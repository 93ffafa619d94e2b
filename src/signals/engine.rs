//! Signal composer: runs the staged pipeline and builds the trade signal.

use crate::config::TradingConfig;
use crate::models::sentiment::SentimentScore;
use crate::models::signal::{Classification, SignalDirection, TradeLevels, TradeSignal};
use crate::models::timeframe::TimeframeSet;
use crate::signals::pipeline::{GateOutcome, PipelineState, SignalPipeline, Stage};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

pub struct SignalEngine {
    pipeline: SignalPipeline,
}

impl SignalEngine {
    pub fn new(config: &TradingConfig) -> Self {
        Self {
            pipeline: SignalPipeline::new(config),
        }
    }

    pub fn pipeline(&self) -> &SignalPipeline {
        &self.pipeline
    }

    /// Run the cascade once for `symbol`. Incomplete data degrades toward a
    /// NEUTRAL signal; this never fails.
    pub fn analyze(&self, symbol: &str, data: &TimeframeSet, sentiment: &SentimentScore) -> TradeSignal {
        self.analyze_at(symbol, data, sentiment, Utc::now())
    }

    /// [`SignalEngine::analyze`] with an explicit creation time.
    pub fn analyze_at(
        &self,
        symbol: &str,
        data: &TimeframeSet,
        sentiment: &SentimentScore,
        created_at: DateTime<Utc>,
    ) -> TradeSignal {
        let mut state = PipelineState::default();

        if data.is_empty() {
            debug!(symbol = %symbol, "SignalEngine: no timeframe data");
            state.reasons.push("No market data available".to_string());
            return TradeSignal::neutral(symbol, state.reasons, state.timeframes, created_at);
        }

        for stage in Stage::ORDER {
            if self.pipeline.run_stage(stage, data, sentiment, &mut state) == GateOutcome::Exit {
                debug!(
                    symbol = %symbol,
                    stage = %stage,
                    main_trend = %state.main_trend,
                    "SignalEngine: cascade exited at {}",
                    stage
                );
                return TradeSignal::neutral(symbol, state.reasons, state.timeframes, created_at);
            }
        }

        let signal = self.finish(symbol, state, created_at);
        info!(
            symbol = %symbol,
            direction = ?signal.direction(),
            confidence = ?signal.confidence(),
            entry = signal.entry_price(),
            risk_reward = signal.risk_reward_ratio(),
            "SignalEngine: generated {:?} signal",
            signal.direction()
        );
        signal
    }

    fn finish(&self, symbol: &str, mut state: PipelineState, created_at: DateTime<Utc>) -> TradeSignal {
        let direction = match state.main_trend {
            Classification::Bullish => SignalDirection::Buy,
            Classification::Bearish => SignalDirection::Sell,
            Classification::Neutral => SignalDirection::Neutral,
        };

        let (Some(entry_price), Some(risk)) = (state.entry_price, state.risk) else {
            state.reasons.push("Incomplete trade levels".to_string());
            return TradeSignal::neutral(symbol, state.reasons, state.timeframes, created_at);
        };
        let levels = TradeLevels {
            entry_price,
            stop_loss: risk.stop_loss,
            take_profit: risk.take_profit,
            risk_reward_ratio: risk.risk_reward_ratio,
        };

        match TradeSignal::directional(
            symbol,
            direction,
            state.confidence,
            levels,
            state.reasons.clone(),
            state.timeframes.clone(),
            created_at,
        ) {
            Some(signal) => signal,
            None => {
                state.reasons.push("Invalid trade levels".to_string());
                TradeSignal::neutral(symbol, state.reasons, state.timeframes, created_at)
            }
        }
    }
}
