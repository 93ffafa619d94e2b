//! Binance spot REST market data.

pub mod client;

pub use client::{normalize_symbol, parse_klines, BinanceClient};
