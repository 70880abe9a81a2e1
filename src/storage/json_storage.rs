use std::ffi::OsString;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::storage::{Ledger, Storage, StoreError};

/// Stores the ledger as a pretty printed JSON document.
///
/// Writes truncate and rewrite the file in place. There is no temp-file swap or fsync, so a
/// crash mid-write can leave a truncated file behind; the next load then recovers from it.
pub struct JsonFileStorage {
    path: PathBuf
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn quarantine_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".corrupt");
        PathBuf::from(name)
    }
}

impl Storage for JsonFileStorage {
    fn read(&self) -> Result<Option<Ledger>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(StoreError::io(&self.path, error))
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { path: self.path.clone(), source })
    }

    fn write(&self, ledger: &Ledger) -> Result<(), StoreError> {
        let file = File::create(&self.path).map_err(|error| StoreError::io(&self.path, error))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, ledger)
            .map_err(|source| StoreError::Encode { path: self.path.clone(), source })?;

        writer.flush().map_err(|error| StoreError::io(&self.path, error))?;

        debug!("Persisted {} transaction(s) to [{}]", ledger.transactions.len(), self.path.display());

        Ok(())
    }

    fn quarantine(&self) -> Result<Option<PathBuf>, StoreError> {
        if !self.path.is_file() {
            return Ok(None);
        }

        let target = self.quarantine_path();
        fs::copy(&self.path, &target).map_err(|error| StoreError::io(&target, error))?;

        Ok(Some(target))
    }
}
