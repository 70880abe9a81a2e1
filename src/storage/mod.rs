mod csv_io;
mod errors;
mod id_generator;
mod json_storage;
mod ledger_store;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{default_categories, Transaction};

pub use errors::StoreError;
pub use id_generator::IdGenerator;
pub use json_storage::JsonFileStorage;
pub use ledger_store::{LoadOutcome, Store};

/// The full persisted state. It is always written as a whole.
///
/// Missing top-level keys keep their defaults, so a file holding only `transactions` still gets
/// the seeded category list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            categories: default_categories()
        }
    }
}

/// Backing medium for a [`Store`].
pub trait Storage {
    /// Reads the persisted ledger, or `None` when nothing has been persisted yet.
    fn read(&self) -> Result<Option<Ledger>, StoreError>;
    /// Replaces the persisted ledger.
    fn write(&self, ledger: &Ledger) -> Result<(), StoreError>;
    /// Keeps a copy of an unreadable ledger before it gets overwritten.
    fn quarantine(&self) -> Result<Option<PathBuf>, StoreError>;
}
