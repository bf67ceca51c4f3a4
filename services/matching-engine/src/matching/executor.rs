//! Trade execution logic
//!
//! Builds trade records for crossing pairs and assigns the monotonic
//! execution sequence.

use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;
use types::trade::Trade;

/// Match executor for handling trade generation
#[derive(Debug, Default)]
pub struct MatchExecutor {
    sequence_counter: u64,
}

impl MatchExecutor {
    /// Create a new match executor with starting sequence number
    pub fn new(starting_sequence: u64) -> Self {
        Self {
            sequence_counter: starting_sequence,
        }
    }

    /// Get next sequence number (monotonically increasing)
    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence_counter;
        self.sequence_counter += 1;
        seq
    }

    /// Build the trade for a crossing bid/ask pair.
    ///
    /// The maker is the earlier arrival of the pair; order ids are assigned
    /// in submission order, so the lower id identifies it. The execution
    /// price is always the best ask's price, matching the reference
    /// behavior this engine reproduces (even when the ask is the incoming
    /// aggressor).
    pub fn execute(
        &mut self,
        bid_id: OrderId,
        ask_id: OrderId,
        ask_price: Price,
        quantity: Quantity,
    ) -> Trade {
        let (maker_order_id, taker_order_id, taker_side) = if bid_id < ask_id {
            (bid_id, ask_id, Side::Sell)
        } else {
            (ask_id, bid_id, Side::Buy)
        };

        Trade::new(
            self.next_sequence(),
            maker_order_id,
            taker_order_id,
            taker_side,
            ask_price,
            quantity,
        )
    }
}
