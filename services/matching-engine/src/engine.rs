//! Matching engine core
//!
//! The `OrderBook` owns both sides of the book, the order id counter, and
//! the trade log. Submission validates, inserts, then matches to quiescence
//! before returning, so callers never observe a crossed book.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use types::errors::InvalidOrder;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

use crate::book::{AskBook, BidBook};
use crate::events::TradeLog;
use crate::matching::{crossing, MatchExecutor};

/// Single-instrument order book with price-time priority matching.
pub struct OrderBook {
    /// The instrument this book trades, for logging and snapshots
    symbol: String,
    /// Bid side (buy orders), best price = highest
    bids: BidBook,
    /// Ask side (sell orders), best price = lowest
    asks: AskBook,
    /// Next order id to assign; advances only on accepted submissions
    next_order_id: u64,
    /// Trade sequence generation
    executor: MatchExecutor,
    /// Append-only execution history
    trades: TradeLog,
}

/// Read-only snapshot of all resting orders.
///
/// Bids are in descending price order, asks ascending, FIFO within a price
/// level — the same order the matching pass consumes them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookView {
    pub bids: Vec<Order>,
    pub asks: Vec<Order>,
}

/// Aggregated per-level depth for market data consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSnapshot {
    pub symbol: String,
    pub bids: Vec<(Price, Quantity)>,
    pub asks: Vec<(Price, Quantity)>,
}

impl OrderBook {
    /// Create an empty book for the given instrument.
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            bids: BidBook::new(),
            asks: AskBook::new(),
            next_order_id: 0,
            executor: MatchExecutor::new(0),
            trades: TradeLog::new(),
        }
    }

    /// Get the symbol of this order book
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Submit a limit order.
    ///
    /// Validation happens before any mutation: a non-positive price or a
    /// zero quantity is rejected with [`InvalidOrder`] and the book (and id
    /// counter) are left exactly as they were. On success the order is
    /// queued behind any resting orders at its price, the matching pass
    /// runs to completion, and the assigned id is returned. Any trades
    /// produced are appended to the trade log.
    pub fn submit(
        &mut self,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Result<OrderId, InvalidOrder> {
        if !price.is_positive() {
            debug!(
                "book {}: rejected {:?} order, price {} not positive",
                self.symbol, side, price
            );
            return Err(InvalidOrder::Price(price.as_decimal()));
        }
        if quantity.is_zero() {
            debug!("book {}: rejected {:?} order, zero quantity", self.symbol, side);
            return Err(InvalidOrder::Quantity);
        }

        let id = OrderId::new(self.next_order_id);
        self.next_order_id += 1;

        let order = Order::new(id, side, price, quantity);
        trace!(
            "book {}: accepted order {} {:?} {}@{}",
            self.symbol, id, side, quantity, price
        );

        match side {
            Side::Buy => self.bids.insert(order),
            Side::Sell => self.asks.insert(order),
        }

        self.run_matching();
        Ok(id)
    }

    /// Match crossing orders until the book is quiescent.
    ///
    /// While both sides are non-empty and the best bid price is at least the
    /// best ask price, the two front orders trade min(bid, ask) units at the
    /// ask's price. Drained orders are removed immediately, so total resting
    /// quantity strictly decreases every iteration and the loop terminates.
    fn run_matching(&mut self) {
        loop {
            let (bid_id, ask_id, ask_price, executed) =
                match (self.bids.front(), self.asks.front()) {
                    (Some(bid), Some(ask)) if crossing::can_match(bid.price, ask.price) => {
                        (bid.id, ask.id, ask.price, bid.quantity.min(ask.quantity))
                    }
                    _ => break,
                };

            let trade = self.executor.execute(bid_id, ask_id, ask_price, executed);
            trace!(
                "book {}: trade #{} {} units at {} (bid {} / ask {})",
                self.symbol, trade.sequence, executed, ask_price, bid_id, ask_id
            );
            self.trades.record(trade);

            self.bids.fill_front(executed);
            self.asks.fill_front(executed);
        }
    }

    /// Read-only view of all resting orders on both sides.
    ///
    /// Idempotent: repeated calls without an intervening `submit` return
    /// identical views.
    pub fn inspect(&self) -> BookView {
        BookView {
            bids: self.bids.orders(),
            asks: self.asks.orders(),
        }
    }

    /// Aggregated depth snapshot (top N price levels per side).
    pub fn depth(&self, levels: usize) -> DepthSnapshot {
        DepthSnapshot {
            symbol: self.symbol.clone(),
            bids: self.bids.depth_snapshot(levels),
            asks: self.asks.depth_snapshot(levels),
        }
    }

    /// Get the best bid price, if any
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Get the best ask price, if any
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.as_decimal() - bid.as_decimal()),
            _ => None,
        }
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => {
                Some((bid.as_decimal() + ask.as_decimal()) / Decimal::from(2))
            }
            _ => None,
        }
    }

    /// Executed trades in execution order (oldest first).
    pub fn trades(&self) -> &[Trade] {
        self.trades.all()
    }

    /// The trade log query surface.
    pub fn trade_log(&self) -> &TradeLog {
        &self.trades
    }

    /// Number of trades executed so far.
    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }

    /// Drop recorded trade history (for consumer checkpointing).
    pub fn clear_trades(&mut self) {
        self.trades.clear();
    }

    /// Total number of resting orders.
    pub fn order_count(&self) -> usize {
        self.bids.order_count() + self.asks.order_count()
    }

    /// Whether both sides are empty.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
