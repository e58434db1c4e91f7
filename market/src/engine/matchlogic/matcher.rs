use crate::engine::data::OrderBook;
use crate::engine::entry::{Order, Quote, Trade};

/// Owns one equity's book and runs its matching loop.
#[derive(Debug, Clone)]
pub struct Matcher {
    orderbook: OrderBook,
}

impl Matcher {
    pub fn new(equity: u32) -> Self {
        Self {
            orderbook: OrderBook::new(equity),
        }
    }

    pub fn orderbook(&self) -> &OrderBook {
        &self.orderbook
    }

    /// Admits `order` into the book and trades until nothing crosses.
    ///
    /// The optimal-trade tracker sees the order before the book does, whether
    /// or not it ends up matching. `trade_counter` is the run-wide count of
    /// trades and is advanced once per fill.
    pub fn place_order(&mut self, order: &Order, trade_counter: &mut u64) -> Vec<Trade> {
        self.orderbook
            .tracker
            .receive(order.side, Quote::new(order.price, order.timestamp));
        self.orderbook.add_order(order);
        self.match_crossed(order.timestamp, trade_counter)
    }

    fn match_crossed(&mut self, timestamp: i64, trade_counter: &mut u64) -> Vec<Trade> {
        let mut trades = Vec::new();
        let book = &mut self.orderbook;

        while let (Some(&bid), Some(&ask)) = (book.bids.best(), book.asks.best()) {
            if bid.price < ask.price {
                break;
            }

            // the order that rested first sets the price
            let price = if bid.sequence < ask.sequence {
                bid.price
            } else {
                ask.price
            };
            let quantity = bid.remaining.min(ask.remaining);

            *trade_counter += 1;
            let trade = Trade {
                id: *trade_counter,
                equity: book.equity,
                timestamp,
                buyer: bid.trader,
                seller: ask.trader,
                price,
                quantity,
                buy_sequence: bid.sequence,
                sell_sequence: ask.sequence,
            };
            log::debug!(
                "stock {} trade #{}: T{} buys {} from T{} at ${}",
                trade.equity,
                trade.id,
                trade.buyer,
                trade.quantity,
                trade.seller,
                trade.price
            );

            if book.bids.fill_best(quantity) {
                log::trace!("bid #{} filled", bid.sequence);
            }
            if book.asks.fill_best(quantity) {
                log::trace!("ask #{} filled", ask.sequence);
            }
            book.median.push(price);
            trades.push(trade);
        }

        trades
    }
}
