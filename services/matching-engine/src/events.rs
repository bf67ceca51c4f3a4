//! Trade event log
//!
//! Append-only record of executed trades in execution order. This is the
//! book's observable output stream: consumers (reporting, test harnesses)
//! query it instead of the engine printing anything itself.

use types::trade::Trade;

/// Append-only trade history for one book.
#[derive(Debug, Clone, Default)]
pub struct TradeLog {
    trades: Vec<Trade>,
}

impl TradeLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self { trades: Vec::new() }
    }

    /// Append an executed trade.
    pub(crate) fn record(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    /// All trades in execution order (oldest first).
    pub fn all(&self) -> &[Trade] {
        &self.trades
    }

    /// The most recent trades, newest first.
    pub fn recent(&self, limit: usize) -> Vec<Trade> {
        self.trades.iter().rev().take(limit).copied().collect()
    }

    /// Look up a trade by its sequence number.
    pub fn get_by_sequence(&self, sequence: u64) -> Option<&Trade> {
        self.trades.iter().find(|t| t.sequence == sequence)
    }

    /// Number of recorded trades.
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    /// Whether no trades have executed yet.
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Drop recorded history (for consumer checkpointing).
    pub fn clear(&mut self) {
        self.trades.clear();
    }
}
