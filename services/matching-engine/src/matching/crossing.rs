//! Crossing detection logic
//!
//! Determines when a bid and ask can match based on price compatibility.

use types::numeric::Price;

/// Check if a bid and ask can match at given prices.
///
/// A trade is possible exactly when the best bid price is greater than or
/// equal to the best ask price.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_match_crossing() {
        let bid = Price::from_u64(100);
        let ask = Price::from_u64(99);
        assert!(can_match(bid, ask), "bid >= ask should match");
    }

    #[test]
    fn test_can_match_exact() {
        let price = Price::from_u64(100);
        assert!(can_match(price, price), "equal prices should match");
    }

    #[test]
    fn test_can_match_no_cross() {
        let bid = Price::from_u64(99);
        let ask = Price::from_u64(100);
        assert!(!can_match(bid, ask), "bid < ask should not match");
    }
}
