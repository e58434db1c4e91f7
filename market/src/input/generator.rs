//! Seeded pseudo-random order stream.
//!
//! Each equity keeps a price anchor that drifts by at most one dollar per
//! order; quotes land within ten percent of it. Timestamps advance so that on
//! average `arrival_rate` orders share one. The same parameters always
//! produce the same stream.

use crate::engine::entry::{OrderRequest, OrderSide};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MAX_QUANTITY: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorParams {
    pub seed: u64,
    pub num_orders: u64,
    pub arrival_rate: u32,
}

#[derive(Debug, Clone)]
pub struct OrderGenerator {
    rng: StdRng,
    params: GeneratorParams,
    num_traders: u32,
    anchors: Vec<i64>,
    emitted: u64,
    timestamp: i64,
}

impl OrderGenerator {
    pub fn new(params: GeneratorParams, num_traders: u32, num_equities: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(params.seed);
        let anchors = (0..num_equities).map(|_| rng.gen_range(10..=100)).collect();
        Self {
            rng,
            params,
            num_traders,
            anchors,
            emitted: 0,
            timestamp: 0,
        }
    }
}

impl Iterator for OrderGenerator {
    type Item = OrderRequest;

    fn next(&mut self) -> Option<OrderRequest> {
        if self.emitted >= self.params.num_orders || self.num_traders == 0 || self.anchors.is_empty()
        {
            return None;
        }
        if self.emitted > 0 && self.rng.gen_ratio(1, self.params.arrival_rate.max(1)) {
            self.timestamp += 1;
        }
        self.emitted += 1;

        let equity = self.rng.gen_range(0..self.anchors.len());
        let anchor = &mut self.anchors[equity];
        *anchor = (*anchor + self.rng.gen_range(-1..=1)).max(1);
        let band = (*anchor / 10).max(1);
        let price = (*anchor + self.rng.gen_range(-band..=band)).max(1);

        let side = if self.rng.gen_bool(0.5) {
            OrderSide::Buy
        } else {
            OrderSide::Sell
        };
        Some(OrderRequest::new(
            self.timestamp,
            side,
            self.rng.gen_range(0..self.num_traders),
            equity as u32,
            price,
            self.rng.gen_range(1..=MAX_QUANTITY),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(seed: u64, num_orders: u64) -> GeneratorParams {
        GeneratorParams {
            seed,
            num_orders,
            arrival_rate: 4,
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let a: Vec<OrderRequest> = OrderGenerator::new(params(7, 200), 5, 3).collect();
        let b: Vec<OrderRequest> = OrderGenerator::new(params(7, 200), 5, 3).collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 200);
    }

    #[test]
    fn test_orders_are_admissible() {
        let orders: Vec<OrderRequest> = OrderGenerator::new(params(11, 500), 3, 4).collect();
        assert_eq!(orders[0].timestamp, 0);
        for pair in orders.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
        for order in &orders {
            assert!(order.trader < 3);
            assert!(order.equity < 4);
            assert!(order.price > 0);
            assert!((1..=MAX_QUANTITY).contains(&order.quantity));
        }
    }

    #[test]
    fn test_empty_market_generates_nothing() {
        assert_eq!(OrderGenerator::new(params(1, 10), 0, 2).count(), 0);
        assert_eq!(OrderGenerator::new(params(1, 10), 2, 0).count(), 0);
    }
}
