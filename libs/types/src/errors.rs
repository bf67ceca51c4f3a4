//! Error taxonomy
//!
//! The matching engine has a single failure mode: a submission with a
//! non-positive price or quantity. Rejection happens before any book
//! mutation, so a failed call leaves the book untouched.

use rust_decimal::Decimal;
use thiserror::Error;

/// Rejected order submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidOrder {
    #[error("invalid price {0}: must be strictly positive")]
    Price(Decimal),

    #[error("invalid quantity: must be strictly positive")]
    Quantity,
}
