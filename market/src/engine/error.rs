//! Engine Errors
//!
//! Every failure the core can report. Domain violations are fatal to a run;
//! precondition misuse is reported distinctly from a normal "no result" answer.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("negative timestamp for order: {timestamp}")]
    NegativeTimestamp { timestamp: i64 },

    #[error("timestamp decreased: {timestamp} arrived after {previous}")]
    TimestampDecreased { previous: i64, timestamp: i64 },

    #[error("price not positive: {price}")]
    NonPositivePrice { price: i64 },

    #[error("quantity not positive: {quantity}")]
    NonPositiveQuantity { quantity: i64 },

    #[error("stock not in range: {equity} (market has {num_equities})")]
    UnknownEquity { equity: u32, num_equities: u32 },

    #[error("trader not in range: {trader} (market has {num_traders})")]
    UnknownTrader { trader: u32, num_traders: u32 },

    #[error("ledger totals of trader {trader} out of range")]
    LedgerOverflow { trader: u32 },

    #[error("median requested before any trade price was observed")]
    NoObservations,

    #[error("no completed buy/sell pair recorded for stock {equity}")]
    NoCompletedTrade { equity: u32 },

    #[error("engine halted after a fatal order violation")]
    Halted,
}
