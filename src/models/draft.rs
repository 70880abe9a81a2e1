use chrono::NaiveDate;
use std::str::FromStr;

use crate::models::errors::ValidationError;
use crate::models::{NewTransaction, Transaction, TransactionType, TransactionUpdate, DEFAULT_CATEGORY};
use crate::types::Monetary;

/// Raw, user-entered transaction fields.
///
/// The store trusts whatever it is handed, so every caller-facing surface funnels input through
/// a draft first. Amounts are rejected unless they are plain non-negative decimals, dates must be
/// ISO `YYYY-MM-DD`, and expense categories must already exist. Income categories are free-form.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    pub date: Option<String>,
    pub transaction_type: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>
}

impl TransactionDraft {
    /// Validates a draft for a brand new transaction.
    ///
    /// A blank date becomes `today`, a blank type becomes `Expense` and a blank category becomes
    /// `Misc`.
    pub fn validate_new(&self, categories: &[String], today: NaiveDate) -> Result<NewTransaction, ValidationError> {
        let amount = match non_blank(&self.amount) {
            Some(value) => parse_amount(value)?,
            None => return Err(ValidationError::MissingAmount)
        };

        let date = match non_blank(&self.date) {
            Some(value) => parse_date(value)?,
            None => today
        };

        let transaction_type = match non_blank(&self.transaction_type) {
            Some(value) => TransactionType::from_str(value)?,
            None => TransactionType::Expense
        };

        let category = non_blank(&self.category).unwrap_or(DEFAULT_CATEGORY).to_string();
        check_category(transaction_type, &category, categories)?;

        Ok(NewTransaction {
            date,
            transaction_type,
            amount,
            category,
            description: self.description.clone().unwrap_or_default()
        })
    }

    /// Validates a draft as a partial update of `existing`. Blank fields are left out of the update.
    pub fn validate_update(&self, existing: &Transaction, categories: &[String]) -> Result<TransactionUpdate, ValidationError> {
        let update = TransactionUpdate {
            date: non_blank(&self.date).map(parse_date).transpose()?,
            transaction_type: non_blank(&self.transaction_type).map(TransactionType::from_str).transpose()?,
            amount: non_blank(&self.amount).map(parse_amount).transpose()?,
            category: non_blank(&self.category).map(str::to_string),
            description: self.description.clone()
        };

        let transaction_type = update.transaction_type.unwrap_or(existing.transaction_type);
        let category = update.category.as_deref().unwrap_or(&existing.category);
        check_category(transaction_type, category, categories)?;

        Ok(update)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

fn parse_amount(value: &str) -> Result<Monetary, ValidationError> {
    Monetary::from_str(value).map_err(|source| ValidationError::InvalidAmount {
        value: value.to_string(),
        source
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| ValidationError::InvalidDate {
        value: value.to_string(),
        source
    })
}

fn check_category(transaction_type: TransactionType, category: &str, categories: &[String]) -> Result<(), ValidationError> {
    if transaction_type == TransactionType::Expense && !categories.iter().any(|known| known == category) {
        return Err(ValidationError::UnknownCategory(category.to_string()));
    }

    Ok(())
}
