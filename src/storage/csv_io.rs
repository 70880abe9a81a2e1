use chrono::NaiveDate;
use csv::{Reader, ReaderBuilder, Trim, WriterBuilder};
use serde::{de, Deserialize, Deserializer};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use crate::models::{NewTransaction, Transaction, TransactionType, DEFAULT_CATEGORY};
use crate::storage::StoreError;
use crate::types::Monetary;

pub const CSV_HEADER: [&str; 6] = ["id", "date", "type", "amount", "category", "desc"];

/// One row of an imported CSV file.
///
/// Any `id` column is ignored; the store assigns fresh ids on import.
#[derive(Debug, Deserialize)]
pub struct ImportRow {
    date: NaiveDate,
    #[serde(rename = "type", deserialize_with = "deserialize_transaction_type")]
    transaction_type: TransactionType,
    amount: Monetary,
    #[serde(default)]
    category: String,
    #[serde(rename = "desc", default)]
    description: String
}

/// Accepts the same spellings as the command line (`Expense`, `expense`, `EXPENSE`, ...).
fn deserialize_transaction_type<'de, D>(deserializer: D) -> Result<TransactionType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    TransactionType::from_str(&value).map_err(de::Error::custom)
}

impl From<ImportRow> for NewTransaction {
    fn from(row: ImportRow) -> Self {
        let category = if row.category.is_empty() { DEFAULT_CATEGORY.to_string() } else { row.category };

        NewTransaction {
            date: row.date,
            transaction_type: row.transaction_type,
            amount: row.amount,
            category,
            description: row.description
        }
    }
}

/// Writes the header row followed by one row per transaction, returning the row count.
pub fn write_transactions(path: &Path, transactions: &[Transaction]) -> Result<usize, StoreError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|error| StoreError::csv(path, error))?;

    writer.write_record(CSV_HEADER).map_err(|error| StoreError::csv(path, error))?;

    for transaction in transactions {
        writer.serialize(transaction).map_err(|error| StoreError::csv(path, error))?;
    }

    writer.flush().map_err(|error| StoreError::io(path, error))?;

    Ok(transactions.len())
}

pub fn open_reader(path: &Path) -> Result<Reader<BufReader<File>>, StoreError> {
    let file = File::open(path).map_err(|error| StoreError::io(path, error))?;

    Ok(ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file)))
}
