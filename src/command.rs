use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountCommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: TransactionKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountCommand {
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
}

impl AccountCommand {
    /// Sign of the amount is left for the account to judge, so that rejected
    /// withdrawals still reach the journal.
    pub fn parse_command(
        kind: TransactionKind,
        amount: Option<Decimal>,
    ) -> Result<Self, AccountCommandError> {
        let Some(amount) = amount else {
            return Err(AccountCommandError::AmountRequired { kind });
        };
        match kind {
            TransactionKind::Deposit => Ok(Self::Deposit { amount }),
            TransactionKind::Withdrawal => Ok(Self::Withdraw { amount }),
        }
    }
}
