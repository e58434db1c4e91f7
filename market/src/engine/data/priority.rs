//! Price-time priority for one side of a book.
//!
//! `BinaryHeap` is a max-heap, so each wrapper orders the *better* order as
//! the greater one. Sequence numbers are unique within a run, which keeps
//! both orderings total.

use crate::engine::entry::ResidualOrder;
use std::cmp::Ordering;
use std::collections::binary_heap::PeekMut;
use std::collections::BinaryHeap;

pub trait PriceTimePriority: Ord + From<ResidualOrder> {
    fn residual(&self) -> &ResidualOrder;
    fn residual_mut(&mut self) -> &mut ResidualOrder;

    /// True when `self` trades before `other`.
    fn outranks(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }
}

/// A resting buy order: higher price first, earlier admission on ties.
#[derive(Debug, Clone, Copy)]
pub struct Bid(ResidualOrder);

/// A resting sell order: lower price first, earlier admission on ties.
#[derive(Debug, Clone, Copy)]
pub struct Ask(ResidualOrder);

impl Ord for Bid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .price
            .cmp(&other.0.price)
            .then_with(|| other.0.sequence.cmp(&self.0.sequence))
    }
}

impl Ord for Ask {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .price
            .cmp(&self.0.price)
            .then_with(|| other.0.sequence.cmp(&self.0.sequence))
    }
}

macro_rules! side_priority {
    ($side:ident) => {
        impl PartialOrd for $side {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl PartialEq for $side {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl Eq for $side {}

        impl From<ResidualOrder> for $side {
            fn from(residual: ResidualOrder) -> Self {
                $side(residual)
            }
        }

        impl PriceTimePriority for $side {
            fn residual(&self) -> &ResidualOrder {
                &self.0
            }

            fn residual_mut(&mut self) -> &mut ResidualOrder {
                &mut self.0
            }
        }
    };
}

side_priority!(Bid);
side_priority!(Ask);

/// One side of an order book.
///
/// Residual quantities are decremented in place through `PeekMut`; quantity
/// takes no part in the ordering, so the heap never needs a reinsert.
#[derive(Debug, Clone)]
pub struct BookSide<P: PriceTimePriority> {
    heap: BinaryHeap<P>,
}

impl<P: PriceTimePriority> BookSide<P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, residual: ResidualOrder) {
        self.heap.push(P::from(residual));
    }

    pub fn best(&self) -> Option<&ResidualOrder> {
        self.heap.peek().map(P::residual)
    }

    /// Fills the best order by `quantity`, removing it once nothing remains.
    /// Returns whether the order left the book.
    pub fn fill_best(&mut self, quantity: i64) -> bool {
        let Some(mut top) = self.heap.peek_mut() else {
            return false;
        };
        top.residual_mut().fill(quantity);
        if top.residual().is_filled() {
            PeekMut::pop(top);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Resting orders from best to worst.
    pub fn in_priority_order(&self) -> Vec<ResidualOrder> {
        let mut sorted: Vec<&P> = self.heap.iter().collect();
        sorted.sort_by(|a, b| b.cmp(a));
        sorted.into_iter().map(|p| *p.residual()).collect()
    }

    pub fn resting_quantity(&self) -> i128 {
        self.heap
            .iter()
            .map(|p| i128::from(p.residual().remaining))
            .sum()
    }
}

impl<P: PriceTimePriority> Default for BookSide<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(price: i64, sequence: u64) -> ResidualOrder {
        ResidualOrder {
            price,
            remaining: 10,
            sequence,
            trader: 0,
        }
    }

    #[test]
    fn test_bid_priority() {
        let high = Bid::from(residual(12, 5));
        let low = Bid::from(residual(10, 1));
        assert!(high.outranks(&low));
        assert!(!low.outranks(&high));

        let early = Bid::from(residual(10, 1));
        let late = Bid::from(residual(10, 2));
        assert!(early.outranks(&late));
        assert!(!late.outranks(&early));
        assert!(!early.outranks(&early));
    }

    #[test]
    fn test_ask_priority() {
        let cheap = Ask::from(residual(9, 5));
        let dear = Ask::from(residual(11, 1));
        assert!(cheap.outranks(&dear));
        assert!(!dear.outranks(&cheap));

        let early = Ask::from(residual(9, 3));
        let late = Ask::from(residual(9, 4));
        assert!(early.outranks(&late));
        assert!(!late.outranks(&early));
    }

    #[test]
    fn test_book_side_order_and_fill() {
        let mut bids: BookSide<Bid> = BookSide::new();
        bids.insert(residual(10, 2));
        bids.insert(residual(11, 3));
        bids.insert(residual(10, 1));

        let sequences: Vec<u64> = bids.in_priority_order().iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![3, 1, 2]);

        assert!(!bids.fill_best(4));
        assert_eq!(bids.best().map(|r| r.remaining), Some(6));
        assert!(bids.fill_best(6));
        assert_eq!(bids.best().map(|r| r.sequence), Some(1));
        assert_eq!(bids.len(), 2);
        assert_eq!(bids.resting_quantity(), 20);
    }

    #[test]
    fn test_fill_on_empty_side() {
        let mut asks: BookSide<Ask> = BookSide::default();
        assert!(!asks.fill_best(1));
        assert!(asks.is_empty());
    }
}
