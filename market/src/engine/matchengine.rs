//! Match Engine Module
//!
//! The market-wide entry point: orders go in one at a time, trades and median
//! reports come out through a [`MarketObserver`], and closing the day yields a
//! [`DaySummary`].

use crate::config::MarketConfig;
use crate::engine::data::TradeOpportunity;
use crate::engine::entry::{OrderRequest, Trade};
use crate::engine::error::EngineError;
use crate::engine::events::MarketObserver;
use crate::engine::spot::{OrderProcessor, TraderAccount};
use serde_derive::Serialize;

/// Per-equity result of the optimal-trade analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EquityOpportunity {
    pub equity: u32,
    #[serde(flatten)]
    pub opportunity: TradeOpportunity,
}

/// Everything reported at the end of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub final_timestamp: i64,
    pub orders_admitted: u64,
    pub trades_completed: u64,
    pub traders: Vec<TraderAccount>,
    pub opportunities: Vec<EquityOpportunity>,
}

#[derive(Debug, Clone)]
pub struct MatchEngine {
    processor: OrderProcessor,
}

impl MatchEngine {
    /// Sizes the books and the ledger; they stay fixed for the run.
    pub fn new(config: MarketConfig) -> MatchEngine {
        log::info!(
            "opening market with {} stocks and {} traders",
            config.num_equities,
            config.num_traders
        );
        MatchEngine {
            processor: OrderProcessor::new(config),
        }
    }

    /// Admits one order and fully resolves it before returning.
    pub fn submit(
        &mut self,
        request: &OrderRequest,
        observer: &mut dyn MarketObserver,
    ) -> Result<Vec<Trade>, EngineError> {
        self.processor.place_order(request, observer)
    }

    /// Publishes the closing medians and summarises the day.
    pub fn close(&self, observer: &mut dyn MarketObserver) -> DaySummary {
        self.processor
            .publish_medians(self.processor.current_time(), observer);

        let summary = self.summary();
        log::info!(
            "market closed at {} after {} orders and {} trades",
            summary.final_timestamp,
            summary.orders_admitted,
            summary.trades_completed
        );
        summary
    }

    pub fn summary(&self) -> DaySummary {
        DaySummary {
            final_timestamp: self.processor.current_time(),
            orders_admitted: self.processor.orders_admitted(),
            trades_completed: self.processor.trades_completed(),
            traders: self.processor.ledger().accounts().to_vec(),
            opportunities: self
                .processor
                .matchers()
                .iter()
                .map(|m| EquityOpportunity {
                    equity: m.orderbook().equity,
                    opportunity: m.orderbook().tracker.outcome(),
                })
                .collect(),
        }
    }

    /// Current median trade price of `equity`.
    pub fn median(&self, equity: u32) -> Result<i64, EngineError> {
        self.processor.matcher(equity)?.orderbook().median.median()
    }

    pub fn processor(&self) -> &OrderProcessor {
        &self.processor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::entry::Quote;
    use crate::engine::events::{EventLog, NoopObserver};

    #[test]
    fn test_two_stock_day() {
        let mut engine = MatchEngine::new(MarketConfig::new(2, 2));
        let mut log = EventLog::default();

        engine
            .submit(&OrderRequest::sell(0, 0, 0, 10, 5), &mut log)
            .unwrap();
        let trades = engine
            .submit(&OrderRequest::buy(1, 1, 0, 12, 5), &mut log)
            .unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!((trades[0].price, trades[0].quantity), (10, 5));

        let summary = engine.close(&mut log);
        assert_eq!(log.medians, vec![(0, 1, 10)]);
        assert_eq!(engine.median(0), Ok(10));
        assert_eq!(engine.median(1), Err(EngineError::NoObservations));

        assert_eq!(summary.trades_completed, 1);
        assert_eq!(summary.final_timestamp, 1);
        assert_eq!(summary.traders[0].net_transfer, 50);
        assert_eq!(summary.traders[1].net_transfer, -50);
        assert_eq!(
            summary.opportunities[0].opportunity,
            TradeOpportunity::Profitable {
                buy: Quote::new(10, 0),
                sell: Quote::new(12, 1)
            }
        );
        assert_eq!(
            summary.opportunities[1].opportunity,
            TradeOpportunity::Unprofitable
        );
    }

    #[test]
    fn test_empty_day() {
        let engine = MatchEngine::new(MarketConfig::new(1, 1));
        let summary = engine.close(&mut NoopObserver);
        assert_eq!(summary.trades_completed, 0);
        assert_eq!(summary.orders_admitted, 0);
        assert_eq!(summary.traders.len(), 1);
        assert_eq!(summary.opportunities.len(), 1);
        assert!(matches!(
            engine.median(5),
            Err(EngineError::UnknownEquity { equity: 5, .. })
        ));
    }

    #[test]
    fn test_summary_serializes() {
        let mut engine = MatchEngine::new(MarketConfig::new(1, 2));
        engine
            .submit(&OrderRequest::sell(0, 0, 0, 10, 1), &mut NoopObserver)
            .unwrap();
        engine
            .submit(&OrderRequest::buy(2, 1, 0, 11, 1), &mut NoopObserver)
            .unwrap();

        let text = serde_json::to_string(&engine.summary()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["trades_completed"], 1);
        assert_eq!(json["opportunities"][0]["outcome"], "profitable");
        assert_eq!(json["opportunities"][0]["buy"]["price"], 10);
        assert_eq!(json["traders"][1]["net_transfer"], -10);
    }
}
