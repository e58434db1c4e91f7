//! Hooks the engine reports through while it runs.
//!
//! Observers only consume; nothing they do flows back into matching.

use crate::engine::entry::Trade;

pub trait MarketObserver {
    /// Called once per executed trade, in execution order.
    fn on_trade(&mut self, _trade: &Trade) {}

    /// Called at each timestamp transition, and once at close, for every
    /// equity that has traded at least once.
    fn on_median(&mut self, _equity: u32, _timestamp: i64, _median: i64) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MarketObserver for NoopObserver {}

/// Keeps every event in memory; handy for replays and assertions.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub trades: Vec<Trade>,
    pub medians: Vec<(u32, i64, i64)>,
}

impl MarketObserver for EventLog {
    fn on_trade(&mut self, trade: &Trade) {
        self.trades.push(*trade);
    }

    fn on_median(&mut self, equity: u32, timestamp: i64, median: i64) {
        self.medians.push((equity, timestamp, median));
    }
}
