//! Trade execution types
//!
//! A trade is the atomic exchange produced when a crossing pair of orders
//! matches. Trades carry a per-book monotonic sequence number, so the trade
//! stream doubles as a total execution order.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An executed trade between a resting (maker) and incoming (taker) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Per-book monotonic sequence number (execution order).
    pub sequence: u64,
    /// The earlier-arriving order of the matched pair.
    pub maker_order_id: OrderId,
    /// The later-arriving order that triggered the match.
    pub taker_order_id: OrderId,
    /// Side of the taker order.
    pub taker_side: Side,
    /// Execution price.
    pub price: Price,
    /// Executed quantity, removed equally from both sides.
    pub quantity: Quantity,
}

impl Trade {
    /// Create a new trade record.
    pub fn new(
        sequence: u64,
        maker_order_id: OrderId,
        taker_order_id: OrderId,
        taker_side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            sequence,
            maker_order_id,
            taker_order_id,
            taker_side,
            price,
            quantity,
        }
    }

    /// Trade value (price × quantity).
    pub fn value(&self) -> Decimal {
        self.price.as_decimal() * Decimal::from(self.quantity.as_u64())
    }
}
