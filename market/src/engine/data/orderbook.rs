use crate::engine::data::median::RunningMedian;
use crate::engine::data::optimal_trade::OptimalTradeTracker;
use crate::engine::data::priority::{Ask, Bid, BookSide};
use crate::engine::entry::{Order, OrderSide, ResidualOrder};

/// Everything one equity keeps for the day.
#[derive(Debug, Clone)]
pub struct OrderBook {
    pub equity: u32,
    pub bids: BookSide<Bid>,
    pub asks: BookSide<Ask>,
    pub median: RunningMedian<i64>,
    pub tracker: OptimalTradeTracker,
}

impl OrderBook {
    pub fn new(equity: u32) -> Self {
        Self {
            equity,
            bids: BookSide::new(),
            asks: BookSide::new(),
            median: RunningMedian::new(),
            tracker: OptimalTradeTracker::new(equity),
        }
    }

    pub fn add_order(&mut self, order: &Order) {
        let residual = ResidualOrder::from(order);
        match order.side {
            OrderSide::Buy => self.bids.insert(residual),
            OrderSide::Sell => self.asks.insert(residual),
        }
    }

    pub fn get_best_bid(&self) -> Option<&ResidualOrder> {
        self.bids.best()
    }

    pub fn get_best_ask(&self) -> Option<&ResidualOrder> {
        self.asks.best()
    }

    /// Both sides are non-empty and the best bid reaches the best ask.
    pub fn is_crossed(&self) -> bool {
        match (self.bids.best(), self.asks.best()) {
            (Some(bid), Some(ask)) => bid.price >= ask.price,
            _ => false,
        }
    }

    pub fn get_spread(&self) -> Option<i64> {
        match (self.get_best_ask(), self.get_best_bid()) {
            (Some(ask), Some(bid)) => Some(ask.price - bid.price),
            _ => None,
        }
    }
}
