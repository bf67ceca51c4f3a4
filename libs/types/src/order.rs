//! Order types
//!
//! A limit order is a value entity owned exclusively by the book once
//! submitted. Its quantity is decremented in place during matching, and the
//! order is removed the moment it reaches zero.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// A limit order resting in (or entering) the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

impl Order {
    /// Create a new order.
    pub fn new(id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            id,
            side,
            price,
            quantity,
        }
    }

    /// Decrement the remaining quantity by an executed fill.
    ///
    /// # Panics
    /// Panics if the fill exceeds the remaining quantity.
    pub fn fill(&mut self, executed: Quantity) {
        assert!(
            executed <= self.quantity,
            "fill exceeds remaining quantity"
        );
        self.quantity -= executed;
    }

    /// Whether the order has been completely filled.
    pub fn is_filled(&self) -> bool {
        self.quantity.is_zero()
    }
}
