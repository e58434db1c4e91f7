//! Trade Types and Structures
//!
//! A trade is one fill between a resting bid and a resting ask of the same equity.

use serde_derive::Serialize;

/// Represents a completed trade in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trade {
    /// Position of this trade in the run, starting at 1
    pub id: u64,
    /// Equity the trade executed on
    pub equity: u32,
    /// Timestamp of the order whose arrival caused the trade
    pub timestamp: i64,
    /// Trader on the buying side
    pub buyer: u32,
    /// Trader on the selling side
    pub seller: u32,
    /// Execution price, set by the order admitted first
    pub price: i64,
    /// Shares exchanged
    pub quantity: i64,
    /// Admission sequence of the bid involved
    pub buy_sequence: u64,
    /// Admission sequence of the ask involved
    pub sell_sequence: u64,
}

impl Trade {
    /// Calculates the cash moved by the trade. Widened so that any pair of
    /// positive `i64` price and quantity multiplies exactly.
    pub fn total_amount(&self) -> i128 {
        i128::from(self.price) * i128::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_amount_of_largest_trade() {
        let trade = Trade {
            id: 1,
            equity: 0,
            timestamp: 0,
            buyer: 0,
            seller: 1,
            price: i64::MAX,
            quantity: i64::MAX,
            buy_sequence: 1,
            sell_sequence: 0,
        };
        assert_eq!(trade.total_amount(), i128::from(i64::MAX) * i128::from(i64::MAX));
    }
}
