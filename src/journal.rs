use std::{
    fmt,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::{AccountEvent, AccountEventKind};

pub const DEFAULT_JOURNAL_PATH: &str = "Bank.txt";

/// A single journal line, minus the holder prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalEntry {
    Deposited { amount: Decimal, balance: Decimal },
    Withdrew { amount: Decimal, balance: Decimal },
    FailedWithdrawal { amount: Decimal, balance: Decimal },
}

impl JournalEntry {
    /// `balance` is the balance after the event was applied.
    pub fn from_event(event: &AccountEvent, balance: Decimal) -> Self {
        let amount = event.amount();
        match event.kind() {
            AccountEventKind::Deposited => Self::Deposited { amount, balance },
            AccountEventKind::Withdrawn => Self::Withdrew { amount, balance },
        }
    }
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JournalEntry::Deposited { amount, balance } => {
                write!(f, "Deposited: {amount} | Balance: {balance}")
            }
            JournalEntry::Withdrew { amount, balance } => {
                write!(f, "Withdrew: {amount} | Balance: {balance}")
            }
            JournalEntry::FailedWithdrawal { amount, balance } => {
                write!(
                    f,
                    "Failed Withdrawal Attempt: {amount} | Balance unchanged: {balance}"
                )
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Error writing to `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Append-only sink for `"<holder>: <entry>"` lines.
pub trait TransactionLog {
    fn record(&mut self, holder: &str, entry: &JournalEntry) -> Result<(), JournalError>;
}

/// Reopens the file in append mode for every record, nothing is held between writes.
#[derive(Debug, Clone)]
pub struct FileTransactionLog {
    path: PathBuf,
}

impl FileTransactionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionLog for FileTransactionLog {
    fn record(&mut self, holder: &str, entry: &JournalEntry) -> Result<(), JournalError> {
        let to_err = |source| JournalError::Write {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(to_err)?;
        writeln!(file, "{holder}: {entry}").map_err(to_err)
    }
}

impl TransactionLog for Vec<String> {
    fn record(&mut self, holder: &str, entry: &JournalEntry) -> Result<(), JournalError> {
        self.push(format!("{holder}: {entry}"));
        Ok(())
    }
}
