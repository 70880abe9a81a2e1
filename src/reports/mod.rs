//! Pure aggregations over a list of transactions.
//!
//! Nothing here performs I/O or mutates its input. All sums use exact decimals.

mod categories;
mod monthly;

pub use categories::category_summary;
pub use monthly::monthly;
