//! Spot Market Module
//!
//! This module provides market-wide order admission:
//! - `clock`: the run's monotonic timestamp
//! - `ledger`: per-trader share and cash totals
//! - `order_processor`: validation, sequencing and routing to per-equity books

pub mod clock;
pub mod ledger;
pub mod order_processor;

pub use clock::GlobalClock;
pub use ledger::{TraderAccount, TraderLedger};
pub use order_processor::OrderProcessor;
