use serde_derive::Serialize;

/// A price observed at a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub price: i64,
    pub timestamp: i64,
}

impl Quote {
    pub fn new(price: i64, timestamp: i64) -> Self {
        Self { price, timestamp }
    }
}
