mod args;
mod models;
mod reports;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::args::{Args, Command, Report, TransactionFields};
use crate::models::TransactionDraft;
use crate::storage::{LoadOutcome, Store};
use crate::types::TransactionId;

fn main() -> ExitCode {
    let args = Args::parse();

    setup_logging(args.log_level);

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            error!("Exiting with error: {error:#}");
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries command output, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

/// Runs one command. `Ok(false)` means the command was understood but had no effect.
fn run(args: Args) -> Result<bool> {
    let (mut store, outcome) = Store::open(&args.data_file)?;

    match &outcome {
        LoadOutcome::Loaded => debug!("Loaded {} transaction(s) from [{}]", store.transactions().len(), args.data_file.display()),
        LoadOutcome::Created => debug!("Created [{}]", args.data_file.display()),
        LoadOutcome::Recovered { reason, backup } => {
            eprintln!("Warning: {reason}. Started over with an empty ledger.");

            if let Some(backup) = backup {
                eprintln!("The unreadable file was kept at [{}]", backup.display());
            }
        }
    }

    let mut output = BufWriter::new(stdout().lock());

    let applied = match args.command {
        Command::Add(fields) => {
            let today = Utc::now().date_naive();
            let transaction = TransactionDraft::from(fields).validate_new(store.categories(), today)?;
            let transaction = store.add_transaction(transaction)?;
            writeln!(output, "Added transaction {}", transaction.id)?;
            true
        }
        Command::Update { id, fields } => update(&mut store, id, fields, &mut output)?,
        Command::Delete { id } => {
            let deleted = store.delete_transaction(id)?;
            report_lookup(&mut output, deleted, "Deleted", id)?;
            deleted
        }
        Command::List => {
            writeln!(output, "id\tdate\ttype\tamount\tcategory\tdesc")?;

            for transaction in store.list_transactions() {
                writeln!(
                    output,
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    transaction.id,
                    transaction.date,
                    transaction.transaction_type,
                    transaction.amount,
                    transaction.category,
                    transaction.description
                )?;
            }

            true
        }
        Command::Categories => {
            for category in store.categories() {
                writeln!(output, "{category}")?;
            }

            true
        }
        Command::AddCategory { name } => {
            let added = store.add_category(&name)?;

            if added {
                writeln!(output, "Added category {}", name.trim())?;
            } else {
                writeln!(output, "Category [{}] was not added: blank or already present", name.trim())?;
            }

            added
        }
        Command::Export { path } => {
            let count = store.export_csv(&path)?;
            writeln!(output, "Exported {count} transaction(s) to {}", path.display())?;
            true
        }
        Command::Import { path } => {
            let count = store.import_csv(&path)?;
            writeln!(output, "Imported {count} transaction(s) from {}", path.display())?;
            true
        }
        Command::Report(Report::Monthly) => {
            for (month, totals) in reports::monthly(store.list_transactions())?.iter().rev() {
                writeln!(output, "{month}  Income:{}  Expense:{}  Net:{}", totals.income, totals.expense, totals.net())?;
            }

            true
        }
        Command::Report(Report::Categories) => {
            for (category, total) in reports::category_summary(store.list_transactions())? {
                writeln!(output, "{category}: {total}")?;
            }

            true
        }
    };

    output.flush()?;

    Ok(applied)
}

fn update(store: &mut Store, id: TransactionId, fields: TransactionFields, output: &mut impl Write) -> Result<bool> {
    let Some(existing) = store.get(id) else {
        report_lookup(output, false, "Updated", id)?;
        return Ok(false);
    };

    let update = TransactionDraft::from(fields).validate_update(existing, store.categories())?;

    if update.is_empty() {
        writeln!(output, "Nothing to change for transaction {id}")?;
        return Ok(false);
    }

    let updated = store.update_transaction(id, &update)?;
    report_lookup(output, updated, "Updated", id)?;

    Ok(updated)
}

fn report_lookup(output: &mut impl Write, found: bool, action: &str, id: TransactionId) -> Result<()> {
    if found {
        writeln!(output, "{action} transaction {id}")?;
    } else {
        writeln!(output, "No transaction with id {id}")?;
    }

    Ok(())
}
