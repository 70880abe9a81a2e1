use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Transaction, TransactionType};
use crate::types::{Monetary, MonetaryError};

/// Income and expense sums for one `YYYY-MM` month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub income: Monetary,
    pub expense: Monetary
}

impl MonthlyTotals {
    /// Income minus expense. May be negative, so it is a plain decimal.
    pub fn net(&self) -> Decimal {
        self.income.value() - self.expense.value()
    }
}

/// Groups transactions by `YYYY-MM` and sums income and expense separately.
///
/// Months iterate in ascending order. Fails with `MonetaryError::Overflow` rather than return a
/// sum that does not fit.
pub fn monthly<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Result<BTreeMap<String, MonthlyTotals>, MonetaryError> {
    let mut result: BTreeMap<String, MonthlyTotals> = BTreeMap::new();

    for transaction in transactions {
        let totals = result.entry(transaction.date.format("%Y-%m").to_string()).or_default();

        match transaction.transaction_type {
            TransactionType::Income => totals.income = totals.income.try_add(transaction.amount)?,
            TransactionType::Expense => totals.expense = totals.expense.try_add(transaction.amount)?
        }
    }

    Ok(result)
}
