use dotenvy::dotenv;
use trendgate::config::{ServiceConfig, TradingConfig};
use trendgate::core::bootstrap::build_analysis_service;
use trendgate::logging;

/// Analyse one symbol (first CLI argument, else the first configured symbol)
/// and print the signal as JSON.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let trading = TradingConfig::from_env();
    let service = ServiceConfig::from_env();

    let symbol = match std::env::args().nth(1) {
        Some(symbol) => symbol,
        None => trading
            .symbols
            .first()
            .cloned()
            .ok_or("no symbol given and SYMBOLS is empty")?,
    };

    let analysis = build_analysis_service(trading, &service, None).await;
    let signal = analysis.analyze_symbol(&symbol).await;

    println!("{}", serde_json::to_string_pretty(&signal)?);
    for (i, reason) in signal.reasons().iter().enumerate() {
        println!("  {}. {}", i + 1, reason);
    }

    Ok(())
}
