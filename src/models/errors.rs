use crate::types::MonetaryError;
use thiserror::Error;

/// Reasons a user-entered transaction is rejected before it ever reaches the store.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid amount [{value}]: {source}")]
    InvalidAmount {
        value: String,
        source: MonetaryError
    },
    #[error("An amount is required")]
    MissingAmount,
    #[error("Invalid date [{value}], expected YYYY-MM-DD: {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError
    },
    #[error("Invalid transaction type [{0}], expected Income or Expense")]
    InvalidType(String),
    #[error("Unknown category [{0}]")]
    UnknownCategory(String)
}
