//! Unique identifier types for exchange entities
//!
//! Order ids are sequential integers assigned by the order book itself:
//! unique, strictly increasing in submission order, never reused. Keeping
//! assignment inside the book makes replays byte-for-byte reproducible.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order.
///
/// Ordering on `OrderId` is arrival ordering: a lower id was submitted
/// earlier. The matching engine relies on this to tell maker from taker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Wrap a raw sequence number as an order id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw sequence number.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
