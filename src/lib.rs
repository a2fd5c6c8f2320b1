/// Account holder and balance. Balance is modified by applying events,
/// which are created by validating deposits and withdrawals.
pub mod account;

/// Turns a requested operation into a command for [`account`].
pub mod command;

/// Append-only text journal of transaction attempts.
pub mod journal;

/// Transaction processor interface, plus the teller that drives one account
/// and writes its journal.
pub mod processor;

/// Voting age check with its own error type.
pub mod eligibility;

/// Keeps the values divisible by five.
pub mod filter;

/// CSV scripts and the service that replays them; lives in the library so the
/// integration tests can use it.
pub mod bin_utils;
