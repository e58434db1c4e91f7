//! Data Structures Module
//!
//! Per-equity state: the two-sided order book, the running median of
//! executed prices and the optimal-trade tracker.

pub mod median;
pub mod optimal_trade;
pub mod orderbook;
pub mod priority;

pub use median::RunningMedian;
pub use optimal_trade::{OptimalTradeTracker, TradeOpportunity, TrackerState};
pub use orderbook::OrderBook;
pub use priority::{Ask, Bid, BookSide, PriceTimePriority};
