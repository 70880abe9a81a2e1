mod draft;
mod errors;
#[cfg(test)]
mod tests;
mod transaction;
mod update;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use draft::TransactionDraft;
pub use errors::ValidationError;
pub use transaction::{NewTransaction, Transaction};
pub use update::TransactionUpdate;

/// Category assigned when the caller leaves it blank.
pub const DEFAULT_CATEGORY: &str = "Misc";

/// Seed for a brand new category set, in display order.
pub const DEFAULT_CATEGORIES: [&str; 6] = ["Salary", "Food", "Transport", "Bills", "Shopping", DEFAULT_CATEGORY];

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|category| category.to_string()).collect()
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => formatter.write_str("Income"),
            TransactionType::Expense => formatter.write_str("Expense")
        }
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ValidationError::InvalidType(value.to_string()))
        }
    }
}
