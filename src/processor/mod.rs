use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::AccountError,
    command::{AccountCommandError, TransactionKind},
};

pub mod teller;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionProcessError {
    #[error(transparent)]
    CommandErr(#[from] AccountCommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

pub trait TransactionProcessor {
    /// Returns the balance after the transaction was applied.
    fn process_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Option<Decimal>,
    ) -> Result<Decimal, TransactionProcessError>;
}
