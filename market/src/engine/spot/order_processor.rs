//! Order Processing Module
//!
//! Admission for the whole market: every order is validated against the run's
//! invariants, stamped with its admission sequence and routed to the book of
//! its equity. The first violation halts the processor for good.

use crate::config::MarketConfig;
use crate::engine::entry::{Order, OrderRequest, Trade};
use crate::engine::error::EngineError;
use crate::engine::events::MarketObserver;
use crate::engine::matchlogic::Matcher;
use crate::engine::spot::{GlobalClock, TraderLedger};

#[derive(Debug, Clone)]
pub struct OrderProcessor {
    config: MarketConfig,
    matchers: Vec<Matcher>,
    ledger: TraderLedger,
    clock: GlobalClock,
    next_sequence: u64,
    trades_completed: u64,
    halted: bool,
}

impl OrderProcessor {
    pub fn new(config: MarketConfig) -> Self {
        Self {
            config,
            matchers: (0..config.num_equities).map(Matcher::new).collect(),
            ledger: TraderLedger::new(config.num_traders),
            clock: GlobalClock::new(),
            next_sequence: 0,
            trades_completed: 0,
            halted: false,
        }
    }

    /// Places a new order in the market
    ///
    /// # Returns
    /// * `Ok(Vec<Trade>)` - Trades executed because of this order, possibly none
    /// * `Err(EngineError)` - The order broke an invariant, or its trades could
    ///   not be settled; the processor is halted
    pub fn place_order(
        &mut self,
        request: &OrderRequest,
        observer: &mut dyn MarketObserver,
    ) -> Result<Vec<Trade>, EngineError> {
        if self.halted {
            return Err(EngineError::Halted);
        }
        if let Err(e) = self.validate(request) {
            log::error!("rejecting order `{}`: {}", request, e);
            self.halted = true;
            return Err(e);
        }

        if let Some(closed) = self.clock.advance(request.timestamp) {
            self.publish_medians(closed, observer);
        }

        let order = Order::admit(*request, self.next_sequence);
        self.next_sequence += 1;
        log::debug!("admitted #{}: {}", order.sequence, request);

        let matcher = &mut self.matchers[order.equity as usize];
        let trades = matcher.place_order(&order, &mut self.trades_completed);
        for trade in &trades {
            if let Err(e) = self.ledger.record(trade) {
                log::error!("cannot settle trade #{}: {}", trade.id, e);
                self.halted = true;
                return Err(e);
            }
            observer.on_trade(trade);
        }
        Ok(trades)
    }

    fn validate(&self, request: &OrderRequest) -> Result<(), EngineError> {
        if request.timestamp < 0 {
            return Err(EngineError::NegativeTimestamp {
                timestamp: request.timestamp,
            });
        }
        if request.equity >= self.config.num_equities {
            return Err(EngineError::UnknownEquity {
                equity: request.equity,
                num_equities: self.config.num_equities,
            });
        }
        if request.trader >= self.config.num_traders {
            return Err(EngineError::UnknownTrader {
                trader: request.trader,
                num_traders: self.config.num_traders,
            });
        }
        if request.price <= 0 {
            return Err(EngineError::NonPositivePrice {
                price: request.price,
            });
        }
        if request.quantity <= 0 {
            return Err(EngineError::NonPositiveQuantity {
                quantity: request.quantity,
            });
        }
        self.clock.check(request.timestamp)
    }

    /// Reports the median of every equity that has traded, as of `timestamp`.
    pub fn publish_medians(&self, timestamp: i64, observer: &mut dyn MarketObserver) {
        for matcher in &self.matchers {
            let book = matcher.orderbook();
            if let Ok(median) = book.median.median() {
                observer.on_median(book.equity, timestamp, median);
            }
        }
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    pub fn matcher(&self, equity: u32) -> Result<&Matcher, EngineError> {
        self.matchers
            .get(equity as usize)
            .ok_or(EngineError::UnknownEquity {
                equity,
                num_equities: self.config.num_equities,
            })
    }

    pub fn ledger(&self) -> &TraderLedger {
        &self.ledger
    }

    pub fn config(&self) -> MarketConfig {
        self.config
    }

    pub fn current_time(&self) -> i64 {
        self.clock.current()
    }

    pub fn trades_completed(&self) -> u64 {
        self.trades_completed
    }

    pub fn orders_admitted(&self) -> u64 {
        self.next_sequence
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }
}
