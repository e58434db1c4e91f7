//! Best single buy-then-sell opportunity, found online.
//!
//! The tracker trades against the visible order flow: a sell order is a price
//! one could have bought at, a buy order is a price one could have sold at.
//! Each order is seen exactly once, in arrival order, and nothing but the
//! current state is kept.

use crate::engine::entry::{OrderSide, Quote};
use crate::engine::error::EngineError;
use serde_derive::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TrackerState {
    /// No sell order seen yet.
    Start,
    /// A candidate purchase, no completed pair.
    HaveBuy { buy: Quote },
    /// A completed pair.
    HaveTrade { buy: Quote, sell: Quote },
    /// A completed pair plus a cheaper purchase that has not yet paid off.
    PendingImprovement {
        buy: Quote,
        sell: Quote,
        pending: Quote,
    },
}

impl TrackerState {
    fn on_order(self, side: OrderSide, quote: Quote) -> TrackerState {
        use OrderSide::{Buy, Sell};
        use TrackerState::*;

        match (self, side) {
            (Start, Sell) => HaveBuy { buy: quote },
            (HaveBuy { buy }, Buy) if quote.price > buy.price => HaveTrade { buy, sell: quote },
            (HaveBuy { buy }, Sell) if quote.price < buy.price => HaveBuy { buy: quote },
            (HaveTrade { buy, sell }, Buy) if quote.price > sell.price => {
                HaveTrade { buy, sell: quote }
            }
            (HaveTrade { buy, sell }, Sell) if quote.price < buy.price => PendingImprovement {
                buy,
                sell,
                pending: quote,
            },
            (PendingImprovement { buy, sell, pending }, Buy)
                if quote.price - pending.price > sell.price - buy.price =>
            {
                HaveTrade {
                    buy: pending,
                    sell: quote,
                }
            }
            (PendingImprovement { buy, sell, pending }, Sell) if quote.price < pending.price => {
                PendingImprovement {
                    buy,
                    sell,
                    pending: quote,
                }
            }
            (unchanged, _) => unchanged,
        }
    }
}

/// End-of-day answer for one equity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TradeOpportunity {
    Unprofitable,
    Profitable { buy: Quote, sell: Quote },
}

impl TradeOpportunity {
    pub fn profit(&self) -> Option<i64> {
        match self {
            TradeOpportunity::Unprofitable => None,
            TradeOpportunity::Profitable { buy, sell } => Some(sell.price - buy.price),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptimalTradeTracker {
    equity: u32,
    state: TrackerState,
}

impl OptimalTradeTracker {
    pub fn new(equity: u32) -> Self {
        Self {
            equity,
            state: TrackerState::Start,
        }
    }

    pub fn receive(&mut self, side: OrderSide, quote: Quote) {
        self.state = self.state.on_order(side, quote);
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    fn best_pair(&self) -> Option<(Quote, Quote)> {
        match self.state {
            TrackerState::HaveTrade { buy, sell }
            | TrackerState::PendingImprovement { buy, sell, .. } => Some((buy, sell)),
            TrackerState::Start | TrackerState::HaveBuy { .. } => None,
        }
    }

    /// The purchase half of the best completed pair.
    pub fn best_buy(&self) -> Result<Quote, EngineError> {
        self.best_pair()
            .map(|(buy, _)| buy)
            .ok_or(EngineError::NoCompletedTrade {
                equity: self.equity,
            })
    }

    /// The sale half of the best completed pair.
    pub fn best_sell(&self) -> Result<Quote, EngineError> {
        self.best_pair()
            .map(|(_, sell)| sell)
            .ok_or(EngineError::NoCompletedTrade {
                equity: self.equity,
            })
    }

    pub fn outcome(&self) -> TradeOpportunity {
        match self.best_pair() {
            Some((buy, sell)) => TradeOpportunity::Profitable { buy, sell },
            None => TradeOpportunity::Unprofitable,
        }
    }
}
