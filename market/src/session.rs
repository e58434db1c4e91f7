//! Runs one trading day from an order stream to its summary.

use crate::config::MarketConfig;
use crate::engine::entry::OrderRequest;
use crate::engine::events::MarketObserver;
use crate::engine::matchengine::{DaySummary, MatchEngine};
use crate::input::InputError;
use anyhow::Context;

/// Feeds every order to a fresh engine, stopping at the first bad record or
/// rejected order. Nothing is summarised for a day that did not finish.
pub fn run_day<I>(
    config: MarketConfig,
    orders: I,
    observer: &mut dyn MarketObserver,
) -> anyhow::Result<DaySummary>
where
    I: IntoIterator<Item = Result<OrderRequest, InputError>>,
{
    let mut engine = MatchEngine::new(config);
    for (index, order) in orders.into_iter().enumerate() {
        let order = order.context("failed to read the order stream")?;
        engine
            .submit(&order, observer)
            .with_context(|| format!("order {} (`{}`) rejected", index, order))?;
    }
    Ok(engine.close(observer))
}
