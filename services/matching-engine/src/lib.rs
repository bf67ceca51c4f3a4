//! Matching Engine
//!
//! Single-instrument continuous double-auction order book with price-time
//! priority matching. Submission is synchronous: an order is validated,
//! inserted, and matched to quiescence before the call returns, so the book
//! is never observable in a crossed state.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced
//! - Deterministic matching (same inputs → same outputs)
//! - Conservation of quantity across every trade
//! - Order ids strictly increasing in submission order

pub mod book;
pub mod engine;
pub mod events;
pub mod matching;

pub use engine::{BookView, DepthSnapshot, OrderBook};
pub use events::TradeLog;
