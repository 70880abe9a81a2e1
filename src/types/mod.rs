mod errors;
mod monetary;

pub use errors::MonetaryError;
pub use monetary::Monetary;

/// Millisecond-timestamp based identifier, unique for the lifetime of a store.
pub type TransactionId = u64;
