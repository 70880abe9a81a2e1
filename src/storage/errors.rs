use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on [{}]: {source}", path.display())]
    Io {
        path: PathBuf,
        source: io::Error
    },
    #[error("Data file [{}] is not valid: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error
    },
    #[error("Unable to encode data for [{}]: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error
    },
    #[error("CSV error on [{}]: {source}", path.display())]
    Csv {
        path: PathBuf,
        source: csv::Error
    },
    #[error("CSV import from [{}] stopped at line {line} after {imported} row(s): {source}", path.display())]
    CsvRow {
        path: PathBuf,
        line: u64,
        imported: usize,
        source: csv::Error
    }
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv { path: path.into(), source }
    }
}
