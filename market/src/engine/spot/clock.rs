use crate::engine::error::EngineError;

/// Last admitted timestamp. Never moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalClock {
    current: i64,
}

impl GlobalClock {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn check(&self, timestamp: i64) -> Result<(), EngineError> {
        if timestamp < self.current {
            return Err(EngineError::TimestampDecreased {
                previous: self.current,
                timestamp,
            });
        }
        Ok(())
    }

    /// Moves to `timestamp`. Returns the timestamp being closed when this is
    /// a transition, `None` when the time is unchanged.
    pub fn advance(&mut self, timestamp: i64) -> Option<i64> {
        if timestamp == self.current {
            return None;
        }
        let closed = self.current;
        self.current = timestamp;
        Some(closed)
    }
}
