//! Match Engine Module
//!
//! This module contains the core components of the market:
//! - `data`: per-equity order book, running median and optimal-trade tracker
//! - `entry`: order, quote and trade records
//! - `error`: everything the engine can refuse
//! - `events`: observer hooks for trades and medians
//! - `matchengine`: market-wide entry point and end-of-day summary
//! - `matchlogic`: the price-time matching loop
//! - `spot`: admission, clock and trader ledger

pub mod data;
pub mod entry;
pub mod error;
pub mod events;
pub mod matchengine;
pub mod matchlogic;
pub mod spot;

pub use data::{OrderBook, RunningMedian, TradeOpportunity};
pub use entry::{Order, OrderRequest, OrderSide, Quote, ResidualOrder, Trade};
pub use error::EngineError;
pub use events::{EventLog, MarketObserver, NoopObserver};
pub use matchengine::{DaySummary, EquityOpportunity, MatchEngine};
pub use matchlogic::Matcher;
pub use spot::{OrderProcessor, TraderAccount, TraderLedger};
