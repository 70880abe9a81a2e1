use std::collections::BTreeMap;

use crate::models::{Transaction, TransactionType};
use crate::types::{Monetary, MonetaryError};

/// Sums expense amounts per category. Income never shows up here.
pub fn category_summary<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Result<BTreeMap<String, Monetary>, MonetaryError> {
    let mut result: BTreeMap<String, Monetary> = BTreeMap::new();

    for transaction in transactions {
        if transaction.transaction_type == TransactionType::Expense {
            let total = result.entry(transaction.category.clone()).or_default();
            *total = total.try_add(transaction.amount)?;
        }
    }

    Ok(result)
}
