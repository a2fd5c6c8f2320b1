use rust_decimal::Decimal;
use tracing::{debug, error, warn};

use crate::{
    account::{Account, AccountError},
    command::{AccountCommand, TransactionKind},
    journal::{JournalEntry, TransactionLog},
};

use super::{TransactionProcessError, TransactionProcessor};

/// Runs deposits and withdrawals against a single account and journals the outcome.
///
/// Journal failures are logged and otherwise ignored, the account operation
/// has already taken effect by the time the record is written.
pub struct Teller<L> {
    account: Account,
    log: L,
}

impl<L> Teller<L>
where
    L: TransactionLog,
{
    pub fn new(account: Account, log: L) -> Self {
        Self { account, log }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn balance(&self) -> Decimal {
        self.account.balance()
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        match self.account.handle_deposit(amount) {
            Ok(evt) => {
                self.account.apply(&evt);
                debug!(holder = self.account.holder(), %amount, balance = %self.balance(), "deposit accepted");
                self.record(JournalEntry::from_event(&evt, self.balance()));
                Ok(self.balance())
            }
            Err(err) => {
                warn!(holder = self.account.holder(), %err, "deposit rejected");
                Err(err)
            }
        }
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        match self.account.handle_withdrawal(amount) {
            Ok(evt) => {
                self.account.apply(&evt);
                debug!(holder = self.account.holder(), %amount, balance = %self.balance(), "withdrawal accepted");
                self.record(JournalEntry::from_event(&evt, self.balance()));
                Ok(self.balance())
            }
            Err(err) => {
                warn!(holder = self.account.holder(), %err, "withdrawal rejected");
                self.record(JournalEntry::FailedWithdrawal {
                    amount: err.amount(),
                    balance: self.balance(),
                });
                Err(err)
            }
        }
    }

    fn record(&mut self, entry: JournalEntry) {
        if let Err(err) = self.log.record(self.account.holder(), &entry) {
            error!(%err, %entry, "failed to journal transaction");
        }
    }
}

impl<L> TransactionProcessor for Teller<L>
where
    L: TransactionLog,
{
    fn process_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Option<Decimal>,
    ) -> Result<Decimal, TransactionProcessError> {
        let cmd = AccountCommand::parse_command(kind, amount)?;
        let balance = match cmd {
            AccountCommand::Deposit { amount } => self.deposit(amount)?,
            AccountCommand::Withdraw { amount } => self.withdraw(amount)?,
        };
        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        command::AccountCommandError,
        journal::{FileTransactionLog, JournalError},
    };

    use super::*;

    fn teller() -> Teller<Vec<String>> {
        Teller::new(Account::new("Alice Moyo", Decimal::from(1000)), Vec::new())
    }

    #[test]
    fn canonical_sequence() {
        let mut teller = teller();

        assert_eq!(teller.deposit(Decimal::from(500)), Ok(Decimal::from(1500)));
        assert!(teller.deposit(Decimal::from(-200)).is_err());
        assert_eq!(teller.balance(), Decimal::from(1500));
        assert_eq!(teller.withdraw(Decimal::from(700)), Ok(Decimal::from(800)));
        assert!(teller.withdraw(Decimal::from(2000)).is_err());
        assert_eq!(teller.balance(), Decimal::from(800));

        assert_eq!(
            teller.log(),
            &[
                "Alice Moyo: Deposited: 500 | Balance: 1500",
                "Alice Moyo: Withdrew: 700 | Balance: 800",
                "Alice Moyo: Failed Withdrawal Attempt: 2000 | Balance unchanged: 800",
            ]
        );
    }

    #[test]
    fn rejected_deposit_is_not_journalled() {
        let mut teller = teller();
        let err = teller.deposit(Decimal::ZERO).unwrap_err();
        assert_eq!(
            err,
            AccountError::InvalidDeposit {
                amount: Decimal::ZERO
            }
        );
        assert!(teller.log().is_empty());
        assert_eq!(teller.balance(), Decimal::from(1000));
    }

    #[test]
    fn non_positive_withdrawal_is_journalled_as_failure() {
        let mut teller = teller();
        let err = teller.withdraw(Decimal::from(-5)).unwrap_err();
        assert!(matches!(err, AccountError::NonPositiveWithdrawal { .. }));
        assert_eq!(
            teller.log(),
            &["Alice Moyo: Failed Withdrawal Attempt: -5 | Balance unchanged: 1000"]
        );
    }

    #[test]
    fn process_some_transactions() {
        let mut teller = teller();
        let balance = teller
            .process_transaction(TransactionKind::Deposit, Some(Decimal::new(2550, 2)))
            .unwrap();
        assert_eq!(balance, Decimal::new(102550, 2));

        let err = teller
            .process_transaction(TransactionKind::Deposit, None)
            .unwrap_err();
        assert!(matches!(
            err,
            TransactionProcessError::CommandErr(AccountCommandError::AmountRequired {
                kind: TransactionKind::Deposit
            })
        ));

        let err = teller
            .process_transaction(TransactionKind::Withdrawal, Some(Decimal::from(5000)))
            .unwrap_err();
        assert!(matches!(
            err,
            TransactionProcessError::AccountErr(AccountError::InsufficientFunds { .. })
        ));
        assert_eq!(teller.log().len(), 2);
    }

    #[test]
    fn deposit_beyond_decimal_range_is_rejected() {
        let mut teller = Teller::new(Account::new("Alice Moyo", Decimal::MAX), Vec::new());
        let err = teller.deposit(Decimal::ONE).unwrap_err();
        assert!(matches!(err, AccountError::BalanceOverflow { .. }));
        assert_eq!(teller.balance(), Decimal::MAX);

        let mut teller = self::teller();
        teller.deposit(Decimal::ONE).unwrap();
        let err = teller
            .process_transaction(
                TransactionKind::Deposit,
                Some(Decimal::from_i128_with_scale(
                    79_228_162_514_264_337_593_543_950_335,
                    0,
                )),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            TransactionProcessError::AccountErr(AccountError::BalanceOverflow { .. })
        ));
        assert_eq!(teller.balance(), Decimal::from(1001));
        assert_eq!(teller.log().len(), 1);
    }

    #[test]
    fn too_precise_amounts_leave_balance_alone() {
        let tiny = Decimal::new(1, 28);
        let mut teller = teller();

        let err = teller.deposit(tiny).unwrap_err();
        assert!(matches!(err, AccountError::InexactAmount { .. }));
        let err = teller.withdraw(tiny).unwrap_err();
        assert!(matches!(err, AccountError::InexactAmount { .. }));

        assert_eq!(teller.balance(), Decimal::from(1000));
        assert_eq!(
            teller.log(),
            &["Alice Moyo: Failed Withdrawal Attempt: 0.0000000000000000000000000001 | Balance unchanged: 1000"]
        );
    }

    struct BrokenLog;

    impl TransactionLog for BrokenLog {
        fn record(&mut self, _holder: &str, _entry: &JournalEntry) -> Result<(), JournalError> {
            Err(JournalError::Write {
                path: "Bank.txt".into(),
                source: std::io::Error::other("disk full"),
            })
        }
    }

    #[test]
    fn journal_failure_does_not_undo_transaction() {
        let mut teller = Teller::new(Account::new("Alice Moyo", Decimal::from(10)), BrokenLog);
        assert_eq!(teller.deposit(Decimal::from(5)), Ok(Decimal::from(15)));
        assert_eq!(teller.withdraw(Decimal::from(15)), Ok(Decimal::ZERO));
    }

    #[test]
    fn journals_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Bank.txt");
        let mut teller = Teller::new(
            Account::new("Alice Moyo", Decimal::from(1000)),
            FileTransactionLog::new(&path),
        );
        teller.withdraw(Decimal::from(1000)).unwrap();
        assert_eq!(teller.balance(), Decimal::ZERO);
        assert_eq!(
            std::fs::read_to_string(teller.log().path()).unwrap(),
            "Alice Moyo: Withdrew: 1000 | Balance: 0\n"
        );
    }
}
