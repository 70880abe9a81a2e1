use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::models::{NewTransaction, Transaction, TransactionUpdate};
use crate::storage::csv_io::{open_reader, write_transactions, ImportRow};
use crate::storage::{IdGenerator, JsonFileStorage, Ledger, Storage, StoreError};
use crate::types::TransactionId;

/// How the store came by its initial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// An existing ledger was read.
    Loaded,
    /// Nothing was persisted yet; a default ledger was written.
    Created,
    /// The persisted ledger could not be read and was replaced by a default one. `backup` is
    /// where the unreadable copy was kept, if anywhere.
    Recovered {
        reason: String,
        backup: Option<PathBuf>
    }
}

/// Sole owner of the persisted transactions and categories.
///
/// Every successful mutation rewrites the whole ledger through the [`Storage`], so memory and the
/// backing medium agree after each call. Calls are synchronous and expect a single writer.
pub struct Store<S: Storage = JsonFileStorage> {
    storage: S,
    ledger: Ledger,
    ids: IdGenerator
}

impl Store<JsonFileStorage> {
    /// Opens the JSON ledger at `path`, creating it when absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<(Self, LoadOutcome), StoreError> {
        Self::with_storage(JsonFileStorage::new(path))
    }
}

impl<S: Storage> Store<S> {
    pub fn with_storage(storage: S) -> Result<(Self, LoadOutcome), StoreError> {
        let mut store = Self {
            storage,
            ledger: Ledger::default(),
            ids: IdGenerator::default()
        };

        let outcome = store.load()?;

        Ok((store, outcome))
    }

    /// Replaces the in-memory state with the persisted one.
    ///
    /// An absent ledger is initialised with defaults and persisted. An unreadable one is copied
    /// aside, then overwritten with defaults; only a failure to write the defaults is an error.
    pub fn load(&mut self) -> Result<LoadOutcome, StoreError> {
        let outcome = match self.storage.read() {
            Ok(Some(ledger)) => {
                self.ledger = ledger;
                LoadOutcome::Loaded
            }
            Ok(None) => {
                self.ledger = Ledger::default();
                self.save()?;
                LoadOutcome::Created
            }
            Err(read_error) => {
                warn!("Discarding unreadable ledger: {read_error}");

                let backup = self.storage.quarantine().unwrap_or_else(|error| {
                    error!("Could not keep a copy of the unreadable ledger: {error}");
                    None
                });

                self.ledger = Ledger::default();
                self.save()?;
                LoadOutcome::Recovered { reason: read_error.to_string(), backup }
            }
        };

        let last_id = self.ledger.transactions.iter().map(|transaction| transaction.id).max().unwrap_or_default();
        self.ids = IdGenerator::seeded(last_id);

        Ok(outcome)
    }

    pub fn save(&self) -> Result<(), StoreError> {
        self.storage.write(&self.ledger)
    }

    /// Assigns an id to `transaction`, appends it and persists.
    pub fn add_transaction(&mut self, transaction: NewTransaction) -> Result<Transaction, StoreError> {
        let transaction = transaction.with_id(self.ids.next_id());
        self.ledger.transactions.push(transaction.clone());
        self.save()?;

        info!("Added transaction [{}] dated [{}]", transaction.id, transaction.date);

        Ok(transaction)
    }

    /// Removes the transaction with `id`. Returns `false`, without persisting, when there is none.
    pub fn delete_transaction(&mut self, id: TransactionId) -> Result<bool, StoreError> {
        let before = self.ledger.transactions.len();
        self.ledger.transactions.retain(|transaction| transaction.id != id);

        if self.ledger.transactions.len() == before {
            warn!("No transaction [{id}] to delete");
            return Ok(false);
        }

        self.save()?;
        info!("Deleted transaction [{id}]");

        Ok(true)
    }

    /// Merges `update` into the transaction with `id`. Returns `false`, without persisting, when
    /// there is none.
    pub fn update_transaction(&mut self, id: TransactionId, update: &TransactionUpdate) -> Result<bool, StoreError> {
        let Some(transaction) = self.ledger.transactions.iter_mut().find(|transaction| transaction.id == id) else {
            warn!("No transaction [{id}] to update");
            return Ok(false);
        };

        update.apply_to(transaction);
        self.save()?;
        info!("Updated transaction [{id}]");

        Ok(true)
    }

    /// All transactions, newest date first. Equal dates keep their insertion order.
    pub fn list_transactions(&self) -> Vec<&Transaction> {
        let mut transactions: Vec<&Transaction> = self.ledger.transactions.iter().collect();
        transactions.sort_by(|left, right| right.date.cmp(&left.date));
        transactions
    }

    /// All transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.ledger.transactions.iter().find(|transaction| transaction.id == id)
    }

    pub fn categories(&self) -> &[String] {
        &self.ledger.categories
    }

    /// Appends `name` to the category set. Returns `false`, without persisting, when it is blank or
    /// already present.
    pub fn add_category(&mut self, name: &str) -> Result<bool, StoreError> {
        let name = name.trim();

        if name.is_empty() || self.ledger.categories.iter().any(|category| category == name) {
            return Ok(false);
        }

        self.ledger.categories.push(name.to_string());
        self.save()?;
        info!("Added category [{name}]");

        Ok(true)
    }

    /// Writes every transaction, in insertion order, to a CSV file at `path`.
    pub fn export_csv(&self, path: &Path) -> Result<usize, StoreError> {
        let count = write_transactions(path, &self.ledger.transactions).inspect_err(|error| {
            error!("CSV export failed: {error}");
        })?;

        info!("Exported {count} transaction(s) to [{}]", path.display());

        Ok(count)
    }

    /// Appends every row of the CSV file at `path` as a new transaction with a fresh id.
    ///
    /// The first bad row stops the import. Rows appended before it are kept and persisted, and the
    /// call still fails.
    pub fn import_csv(&mut self, path: &Path) -> Result<usize, StoreError> {
        let mut reader = open_reader(path).inspect_err(|error| {
            error!("CSV import failed: {error}");
        })?;

        let mut imported = 0;

        for result in reader.deserialize::<ImportRow>() {
            match result {
                Ok(row) => {
                    let transaction = NewTransaction::from(row).with_id(self.ids.next_id());
                    self.ledger.transactions.push(transaction);
                    imported += 1;
                }
                Err(source) => {
                    let line = source.position().map(|position| position.line()).unwrap_or_default();
                    error!("CSV import from [{}] stopped at line {line}: {source}", path.display());

                    if imported > 0 {
                        self.save()?;
                    }

                    return Err(StoreError::CsvRow { path: path.to_path_buf(), line, imported, source });
                }
            }
        }

        self.save()?;
        info!("Imported {imported} transaction(s) from [{}]", path.display());

        Ok(imported)
    }
}
