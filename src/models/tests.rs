use super::{default_categories, NewTransaction, Transaction, TransactionDraft, TransactionType, TransactionUpdate, ValidationError};

use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;

use crate::types::Monetary;

fn today() -> Result<NaiveDate> {
    Ok(NaiveDate::from_str("2024-06-01")?)
}

fn draft(date: &str, transaction_type: &str, amount: &str, category: &str) -> TransactionDraft {
    TransactionDraft {
        date: Some(date.to_string()),
        transaction_type: Some(transaction_type.to_string()),
        amount: Some(amount.to_string()),
        category: Some(category.to_string()),
        description: Some("lunch".to_string())
    }
}

fn existing(transaction_type: TransactionType, category: &str) -> Result<Transaction> {
    Ok(NewTransaction {
        date: NaiveDate::from_str("2024-03-05")?,
        transaction_type,
        amount: Monetary::from_str("12.50")?,
        category: category.to_string(),
        description: "lunch".to_string()
    }.with_id(7))
}

#[test]
fn test_valid_draft_produces_new_transaction() -> Result<()> {
    let transaction = draft("2024-03-05", "Expense", "12.50", "Food").validate_new(&default_categories(), today()?)?;

    assert_eq!(transaction.date, NaiveDate::from_str("2024-03-05")?);
    assert_eq!(transaction.transaction_type, TransactionType::Expense);
    assert_eq!(transaction.amount.to_string(), "12.50");
    assert_eq!(transaction.category, "Food");
    assert_eq!(transaction.description, "lunch");

    Ok(())
}

#[test]
fn test_blank_fields_fall_back_to_defaults() -> Result<()> {
    let draft = TransactionDraft {
        amount: Some("3".to_string()),
        date: Some("  ".to_string()),
        ..TransactionDraft::default()
    };

    let transaction = draft.validate_new(&default_categories(), today()?)?;

    assert_eq!(transaction.date, today()?);
    assert_eq!(transaction.transaction_type, TransactionType::Expense);
    assert_eq!(transaction.category, "Misc");
    assert_eq!(transaction.description, "");

    Ok(())
}

#[test]
fn test_malformed_amount_is_rejected() -> Result<()> {
    let result = draft("2024-03-05", "Expense", "twelve", "Food").validate_new(&default_categories(), today()?);
    assert!(matches!(result, Err(ValidationError::InvalidAmount { .. })));

    let result = draft("2024-03-05", "Expense", "-4.00", "Food").validate_new(&default_categories(), today()?);
    assert!(matches!(result, Err(ValidationError::InvalidAmount { .. })));

    let result = draft("2024-03-05", "Expense", "", "Food").validate_new(&default_categories(), today()?);
    assert!(matches!(result, Err(ValidationError::MissingAmount)));

    Ok(())
}

#[test]
fn test_malformed_date_and_type_are_rejected() -> Result<()> {
    let result = draft("05/03/2024", "Expense", "1", "Food").validate_new(&default_categories(), today()?);
    assert!(matches!(result, Err(ValidationError::InvalidDate { .. })));

    let result = draft("2024-02-30", "Expense", "1", "Food").validate_new(&default_categories(), today()?);
    assert!(matches!(result, Err(ValidationError::InvalidDate { .. })));

    let result = draft("2024-03-05", "Transfer", "1", "Food").validate_new(&default_categories(), today()?);
    assert!(matches!(result, Err(ValidationError::InvalidType(_))));

    Ok(())
}

#[test]
fn test_expense_categories_are_enforced_but_income_categories_are_not() -> Result<()> {
    let result = draft("2024-03-05", "Expense", "1", "Holidays").validate_new(&default_categories(), today()?);
    assert!(matches!(result, Err(ValidationError::UnknownCategory(_))));

    let transaction = draft("2024-03-05", "income", "1", "Gift").validate_new(&default_categories(), today()?)?;
    assert_eq!(transaction.transaction_type, TransactionType::Income);
    assert_eq!(transaction.category, "Gift");

    Ok(())
}

#[test]
fn test_update_draft_only_carries_present_fields() -> Result<()> {
    let draft = TransactionDraft {
        amount: Some("20.00".to_string()),
        ..TransactionDraft::default()
    };

    let update = draft.validate_update(&existing(TransactionType::Expense, "Food")?, &default_categories())?;

    assert_eq!(update.amount, Some(Monetary::from_str("20.00")?));
    assert!(update.date.is_none());
    assert!(update.transaction_type.is_none());
    assert!(update.category.is_none());
    assert!(update.description.is_none());

    Ok(())
}

#[test]
fn test_update_draft_checks_the_resulting_category() -> Result<()> {
    let draft = TransactionDraft {
        transaction_type: Some("Expense".to_string()),
        ..TransactionDraft::default()
    };

    let result = draft.validate_update(&existing(TransactionType::Income, "Gift")?, &default_categories());

    assert!(matches!(result, Err(ValidationError::UnknownCategory(_))));

    Ok(())
}

#[test]
fn test_update_merges_fields_and_preserves_the_rest() -> Result<()> {
    let mut transaction = existing(TransactionType::Expense, "Food")?;
    let update = TransactionUpdate {
        category: Some("Bills".to_string()),
        description: Some("power".to_string()),
        ..TransactionUpdate::default()
    };

    update.apply_to(&mut transaction);

    assert_eq!(transaction.id, 7);
    assert_eq!(transaction.category, "Bills");
    assert_eq!(transaction.description, "power");
    assert_eq!(transaction.amount.to_string(), "12.50");
    assert_eq!(transaction.date, NaiveDate::from_str("2024-03-05")?);
    assert!(!update.is_empty());
    assert!(TransactionUpdate::default().is_empty());

    Ok(())
}

#[test]
fn test_transaction_json_layout() -> Result<()> {
    let json = serde_json::to_value(existing(TransactionType::Expense, "Food")?)?;

    assert_eq!(json["id"], 7);
    assert_eq!(json["date"], "2024-03-05");
    assert_eq!(json["type"], "Expense");
    assert_eq!(json["amount"], "12.50");
    assert_eq!(json["category"], "Food");
    assert_eq!(json["desc"], "lunch");

    Ok(())
}
