//! Error types for the fulfillment engine
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("No pending orders")]
    EmptyQueue,

    #[error("No pending order is fulfillable with current stock")]
    NoFulfillableOrder,
}

/// Submission validation errors, one variant per offending field
///
/// Always recoverable: the caller can fix the field and resubmit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Item must be a non-empty string")]
    Item,

    #[error("Quantity must be a positive integer, got {quantity}")]
    Quantity { quantity: i64 },

    #[error("Unrecognized category: {value}")]
    Category { value: String },

    #[error("Timestamp is not a valid RFC 3339 instant: {value}")]
    Timestamp { value: String },
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Item => "item",
            ValidationError::Quantity { .. } => "quantity",
            ValidationError::Category { .. } => "category",
            ValidationError::Timestamp { .. } => "timestamp",
        }
    }
}

/// Ledger-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient stock for {item}: requested {requested}, available {available}")]
    InsufficientStock {
        item: String,
        requested: u32,
        available: u32,
    },
}
