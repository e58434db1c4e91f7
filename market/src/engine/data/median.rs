//! Streaming median of executed trade prices.

use crate::engine::error::EngineError;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::ops::{Add, Div, Sub};

/// Median over every value pushed so far, kept as two heaps.
///
/// `low` is a max-heap of the lower half and `high` a min-heap of the upper
/// half; their sizes never differ by more than one. With an even count the
/// median is the average of both tops in `T`'s own arithmetic, so positive
/// integer prices truncate and decimal prices stay exact. It is taken as
/// `low + (high - low) / 2`; `low <= high` keeps the difference in range.
#[derive(Debug, Clone)]
pub struct RunningMedian<T: Ord> {
    low: BinaryHeap<T>,
    high: BinaryHeap<Reverse<T>>,
}

impl<T> RunningMedian<T>
where
    T: Ord + Copy + Add<Output = T> + Sub<Output = T> + Div<Output = T> + From<u8>,
{
    pub fn new() -> Self {
        Self {
            low: BinaryHeap::new(),
            high: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        if matches!(self.high.peek(), Some(Reverse(top)) if value < *top) {
            self.low.push(value);
        } else {
            self.high.push(Reverse(value));
        }

        if self.high.len() == self.low.len() + 2 {
            if let Some(Reverse(moved)) = self.high.pop() {
                self.low.push(moved);
            }
        } else if self.low.len() == self.high.len() + 2 {
            if let Some(moved) = self.low.pop() {
                self.high.push(Reverse(moved));
            }
        }
    }

    pub fn has_value(&self) -> bool {
        !self.high.is_empty() || !self.low.is_empty()
    }

    pub fn len(&self) -> usize {
        self.low.len() + self.high.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_value()
    }

    pub fn median(&self) -> Result<T, EngineError> {
        match (self.low.peek(), self.high.peek()) {
            (Some(low), Some(Reverse(high))) if self.low.len() == self.high.len() => {
                Ok(*low + (*high - *low) / T::from(2u8))
            }
            (_, Some(Reverse(high))) if self.high.len() > self.low.len() => Ok(*high),
            (Some(low), _) => Ok(*low),
            _ => Err(EngineError::NoObservations),
        }
    }

    #[cfg(test)]
    fn half_sizes(&self) -> (usize, usize) {
        (self.low.len(), self.high.len())
    }
}

impl<T> Default for RunningMedian<T>
where
    T: Ord + Copy + Add<Output = T> + Sub<Output = T> + Div<Output = T> + From<u8>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn reference_median(values: &[i64]) -> i64 {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2
        } else {
            sorted[mid]
        }
    }

    #[test]
    fn test_empty_median_is_misuse() {
        let median: RunningMedian<i64> = RunningMedian::new();
        assert!(!median.has_value());
        assert_eq!(median.median(), Err(EngineError::NoObservations));
    }

    #[test]
    fn test_single_value() {
        let mut median = RunningMedian::new();
        median.push(10i64);
        assert!(median.has_value());
        assert_eq!(median.median(), Ok(10));
    }

    #[test]
    fn test_even_count_averages_both_roots() {
        let mut median = RunningMedian::new();
        median.push(10i64);
        median.push(20);
        assert_eq!(median.median(), Ok(15));

        median.push(1);
        assert_eq!(median.median(), Ok(10));

        // integer prices truncate
        median.push(13);
        assert_eq!(median.median(), Ok(11));
    }

    #[test]
    fn test_average_of_large_prices_does_not_overflow() {
        let mut median = RunningMedian::new();
        median.push(i64::MAX - 1);
        median.push(i64::MAX - 3);
        assert_eq!(median.median(), Ok(i64::MAX - 2));

        median.push(i64::MAX);
        assert_eq!(median.median(), Ok(i64::MAX - 1));
        median.push(i64::MAX);
        assert_eq!(median.median(), Ok(i64::MAX - 1));
    }

    #[test]
    fn test_descending_pushes_stay_balanced() {
        let mut median = RunningMedian::new();
        for value in (1..=9i64).rev() {
            median.push(value);
            let (low, high) = median.half_sizes();
            assert!(low.abs_diff(high) <= 1);
        }
        assert_eq!(median.median(), Ok(5));
        assert_eq!(median.len(), 9);
    }

    #[test]
    fn test_decimal_median_keeps_fraction() {
        let mut median = RunningMedian::new();
        median.push(dec!(10));
        median.push(dec!(11));
        assert_eq!(median.median(), Ok(dec!(10.5)));
    }

    proptest! {
        #[test]
        fn prop_matches_sorted_reference(values in prop::collection::vec(1i64..10_000, 0..1000)) {
            let mut median = RunningMedian::new();
            prop_assert_eq!(median.median(), Err(EngineError::NoObservations));
            for (i, value) in values.iter().enumerate() {
                median.push(*value);
                let (low, high) = median.half_sizes();
                prop_assert!(low.abs_diff(high) <= 1);
                prop_assert_eq!(median.median(), Ok(reference_median(&values[..=i])));
            }
        }
    }
}
