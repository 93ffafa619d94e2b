//! Logging setup: JSON in production, coloured text elsewhere.

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Output format for a deployment environment name.
pub fn log_format_for(environment: &str) -> LogFormat {
    match environment {
        "production" | "prod" => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default `info`
/// filter. Calling it twice is a no-op.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    let _ = match log_format_for(&get_environment()) {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stdout),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .try_init(),
    };
}
