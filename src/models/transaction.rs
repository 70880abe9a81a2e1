use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::TransactionType;
use crate::types::{Monetary, TransactionId};

/// A single recorded income or expense event.
///
/// Field order matters: it is the column order of the CSV export
/// (`id,date,type,amount,category,desc`) and the key order of the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Assigned by the store at creation time.
    pub id: TransactionId,
    /// Calendar date, persisted as `YYYY-MM-DD`.
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Exact amount, persisted as a decimal string.
    pub amount: Monetary,
    pub category: String,
    #[serde(rename = "desc", default)]
    pub description: String
}

/// A transaction that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub transaction_type: TransactionType,
    pub amount: Monetary,
    pub category: String,
    pub description: String
}

impl NewTransaction {
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            transaction_type: self.transaction_type,
            amount: self.amount,
            category: self.category,
            description: self.description
        }
    }
}
