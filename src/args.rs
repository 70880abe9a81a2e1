//! Command-line surface of the finance tracker.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::models::TransactionDraft;
use crate::types::TransactionId;

/// finance-tracker: record income and expenses in a local JSON file and report on them.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// The JSON file holding transactions and categories. Created when missing.
    #[arg(long, env = "FINANCE_TRACKER_DATA", default_value = "finance_data.json", global = true)]
    pub data_file: PathBuf,

    /// Logging verbosity, one of: off, error, warn, info, debug, trace. Logs go to stderr.
    #[arg(long, default_value_t = LevelFilter::ERROR, global = true)]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a new transaction.
    Add(TransactionFields),
    /// Change some fields of an existing transaction.
    Update {
        id: TransactionId,
        #[command(flatten)]
        fields: TransactionFields
    },
    /// Remove a transaction.
    Delete {
        id: TransactionId
    },
    /// Print every transaction, newest first.
    List,
    /// Print the known categories.
    Categories,
    /// Register a new category.
    AddCategory {
        name: String
    },
    /// Write all transactions to a CSV file.
    Export {
        path: PathBuf
    },
    /// Append the rows of a CSV file as new transactions.
    Import {
        path: PathBuf
    },
    /// Print an aggregate report.
    #[command(subcommand)]
    Report(Report)
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Report {
    /// Income, expense and net per month, newest first.
    Monthly,
    /// Expense totals per category.
    Categories
}

/// Raw transaction fields as typed by the user.
#[derive(Debug, Clone, ClapArgs)]
pub struct TransactionFields {
    /// Date as YYYY-MM-DD. Defaults to today when adding.
    #[arg(long)]
    pub date: Option<String>,

    /// Income or Expense. Defaults to Expense when adding.
    #[arg(long = "type")]
    pub transaction_type: Option<String>,

    /// Exact decimal amount, e.g. 12.50.
    #[arg(long)]
    pub amount: Option<String>,

    /// Category name. Defaults to Misc when adding.
    #[arg(long)]
    pub category: Option<String>,

    /// Free-text description.
    #[arg(long = "desc")]
    pub description: Option<String>
}

impl From<TransactionFields> for TransactionDraft {
    fn from(fields: TransactionFields) -> Self {
        TransactionDraft {
            date: fields.date,
            transaction_type: fields.transaction_type,
            amount: fields.amount,
            category: fields.category,
            description: fields.description
        }
    }
}
