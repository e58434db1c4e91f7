//! Stock market simulator.
//!
//! Orders for a fixed set of equities arrive in timestamp order; each equity
//! matches them under price-time priority while tracking the median trade
//! price and the best single buy-then-sell opportunity of the day.

pub mod config;
pub mod engine;
pub mod input;
pub mod report;
pub mod session;

pub use config::{MarketConfig, RuntimeConfig};
pub use engine::{DaySummary, EngineError, MatchEngine, MarketObserver, OrderRequest, OrderSide};
