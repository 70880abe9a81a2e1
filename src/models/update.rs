use chrono::NaiveDate;

use crate::models::{Transaction, TransactionType};
use crate::types::Monetary;

/// Partial update of a transaction. Only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionUpdate {
    pub date: Option<NaiveDate>,
    pub transaction_type: Option<TransactionType>,
    pub amount: Option<Monetary>,
    pub category: Option<String>,
    pub description: Option<String>
}

impl TransactionUpdate {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.transaction_type.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }

    /// Merges the present fields into `transaction`, leaving the others untouched.
    pub fn apply_to(&self, transaction: &mut Transaction) {
        if let Some(date) = self.date {
            transaction.date = date;
        }

        if let Some(transaction_type) = self.transaction_type {
            transaction.transaction_type = transaction_type;
        }

        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }

        if let Some(category) = &self.category {
            transaction.category = category.clone();
        }

        if let Some(description) = &self.description {
            transaction.description = description.clone();
        }
    }
}
