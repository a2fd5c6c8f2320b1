use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountEventKind {
    Deposited,
    Withdrawn,
}

#[derive(Debug, Clone, Copy)]
pub struct AccountEvent {
    amount: Decimal,
    kind: AccountEventKind,
}

impl AccountEvent {
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> AccountEventKind {
        self.kind
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid deposit amount: {amount}")]
    InvalidDeposit { amount: Decimal },
    #[error("Invalid withdrawal amount: {amount}")]
    NonPositiveWithdrawal { amount: Decimal },
    #[error("Withdrawal amount {amount} exceeded account balance {balance}")]
    InsufficientFunds { amount: Decimal, balance: Decimal },
    #[error("Balance {balance} cannot hold a change of {amount}")]
    BalanceOverflow { amount: Decimal, balance: Decimal },
    #[error("Amount {amount} cannot be applied exactly to balance {balance}")]
    InexactAmount { amount: Decimal, balance: Decimal },
}

impl AccountError {
    pub fn amount(&self) -> Decimal {
        match self {
            AccountError::InvalidDeposit { amount }
            | AccountError::NonPositiveWithdrawal { amount }
            | AccountError::InsufficientFunds { amount, .. }
            | AccountError::BalanceOverflow { amount, .. }
            | AccountError::InexactAmount { amount, .. } => *amount,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    holder: String,
    balance: Decimal,
}

impl Account {
    pub fn new(holder: impl Into<String>, opening_balance: Decimal) -> Self {
        Self {
            holder: holder.into(),
            balance: opening_balance,
        }
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn apply(&mut self, event: &AccountEvent) {
        match event.kind {
            AccountEventKind::Deposited => {
                self.balance += event.amount;
            }
            AccountEventKind::Withdrawn => {
                self.balance -= event.amount;
            }
        }
    }

    pub fn handle_deposit(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidDeposit { amount });
        }
        self.check_representable(self.balance.checked_add(amount), amount)?;
        Ok(AccountEvent {
            amount,
            kind: AccountEventKind::Deposited,
        })
    }

    pub fn handle_withdrawal(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::NonPositiveWithdrawal { amount });
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                amount,
                balance: self.balance,
            });
        }
        self.check_representable(self.balance.checked_sub(amount), amount)?;
        Ok(AccountEvent {
            amount,
            kind: AccountEventKind::Withdrawn,
        })
    }

    /// `Decimal` rounds once a result needs more than 28 significant digits,
    /// so the new balance has to differ from the old one by exactly `amount`.
    fn check_representable(
        &self,
        new_balance: Option<Decimal>,
        amount: Decimal,
    ) -> Result<(), AccountError> {
        let balance = self.balance;
        let Some(new_balance) = new_balance else {
            return Err(AccountError::BalanceOverflow { amount, balance });
        };
        if new_balance.checked_sub(balance).map(|d| d.abs()) != Some(amount) {
            return Err(AccountError::InexactAmount { amount, balance });
        }
        Ok(())
    }
}
