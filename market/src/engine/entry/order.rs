use serde_derive::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => f.write_str("BUY"),
            OrderSide::Sell => f.write_str("SELL"),
        }
    }
}

/// A raw order record as delivered by the input source.
///
/// Numeric fields are signed so that the engine, not the reader, decides
/// whether a timestamp, price or quantity is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub timestamp: i64,
    pub side: OrderSide,
    pub trader: u32,
    pub equity: u32,
    pub price: i64,
    pub quantity: i64,
}

impl OrderRequest {
    pub fn new(
        timestamp: i64,
        side: OrderSide,
        trader: u32,
        equity: u32,
        price: i64,
        quantity: i64,
    ) -> Self {
        Self {
            timestamp,
            side,
            trader,
            equity,
            price,
            quantity,
        }
    }

    pub fn buy(timestamp: i64, trader: u32, equity: u32, price: i64, quantity: i64) -> Self {
        Self::new(timestamp, OrderSide::Buy, trader, equity, price, quantity)
    }

    pub fn sell(timestamp: i64, trader: u32, equity: u32, price: i64, quantity: i64) -> Self {
        Self::new(timestamp, OrderSide::Sell, trader, equity, price, quantity)
    }
}

/// Writes the record in trace-list syntax: `0 BUY T1 S2 $100 #50`.
impl fmt::Display for OrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} T{} S{} ${} #{}",
            self.timestamp, self.side, self.trader, self.equity, self.price, self.quantity
        )
    }
}

/// An order that passed admission and carries its admission sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub sequence: u64,
    pub timestamp: i64,
    pub side: OrderSide,
    pub trader: u32,
    pub equity: u32,
    pub price: i64,
    pub quantity: i64,
}

impl Order {
    pub fn admit(request: OrderRequest, sequence: u64) -> Self {
        Self {
            sequence,
            timestamp: request.timestamp,
            side: request.side,
            trader: request.trader,
            equity: request.equity,
            price: request.price,
            quantity: request.quantity,
        }
    }
}

/// In-book projection of an order: only what matching needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidualOrder {
    pub price: i64,
    pub remaining: i64,
    pub sequence: u64,
    pub trader: u32,
}

impl ResidualOrder {
    pub fn is_filled(&self) -> bool {
        self.remaining == 0
    }

    /// Takes `quantity` off the residual. Callers never fill more than remains.
    pub fn fill(&mut self, quantity: i64) {
        debug_assert!(quantity <= self.remaining);
        self.remaining -= quantity;
    }
}

impl From<&Order> for ResidualOrder {
    fn from(order: &Order) -> Self {
        Self {
            price: order.price,
            remaining: order.quantity,
            sequence: order.sequence,
            trader: order.trader,
        }
    }
}
