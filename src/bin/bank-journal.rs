use std::{fs::File, io::Read, path::PathBuf};

use anyhow::{Context, Result};
use bank_journal::{
    account::Account,
    bin_utils::{Service, script_parser::DEMO_SCRIPT},
    eligibility::check_age,
    filter::divisible_by_five,
    journal::{DEFAULT_JOURNAL_PATH, FileTransactionLog},
    processor::teller::Teller,
};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bank-journal")]
#[command(about = "Toy bank account with an append-only transaction journal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay deposits and withdrawals against a single account
    Account {
        /// CSV script with a `type,amount` header; the demo walkthrough runs when omitted
        script: Option<PathBuf>,

        /// Account holder's name, used as the journal line prefix
        #[arg(long, default_value = "Alice Moyo")]
        holder: String,

        /// Balance the account is opened with
        #[arg(long, default_value = "1000", allow_negative_numbers = true)]
        opening_balance: Decimal,

        /// Journal file, appended to
        #[arg(long, env = "BANK_JOURNAL", default_value = DEFAULT_JOURNAL_PATH)]
        journal: PathBuf,
    },

    /// Check that each age is old enough to vote, stopping at the first that isn't
    CheckAge {
        #[arg(required = true)]
        ages: Vec<u32>,
    },

    /// Print the values divisible by five
    MultiplesOfFive {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Account {
            script,
            holder,
            opening_balance,
            journal,
        } => run_account(script, holder, opening_balance, journal),
        Commands::CheckAge { ages } => {
            for age in ages {
                if let Err(err) = check_age(age) {
                    println!("Custom Exception Caught: {err}");
                    break;
                }
                println!("Age {age} is valid. You can vote!");
            }
            Ok(())
        }
        Commands::MultiplesOfFive { values } => {
            for n in divisible_by_five(values) {
                println!("{n}");
            }
            Ok(())
        }
    }
}

fn run_account(
    script: Option<PathBuf>,
    holder: String,
    opening_balance: Decimal,
    journal: PathBuf,
) -> Result<()> {
    let input: Box<dyn Read> = match script {
        Some(path) => Box::new(
            File::open(&path).with_context(|| format!("Failed to open `{}`", path.display()))?,
        ),
        None => Box::new(DEMO_SCRIPT.as_bytes()),
    };

    let service = Service {
        input,
        output: &mut std::io::stdout(),
        teller: Teller::new(
            Account::new(holder, opening_balance),
            FileTransactionLog::new(journal),
        ),
        error_printer: Box::new(|line, err| eprintln!("Error at line {line}: {err}")),
    };
    service.run().map(|_| ())
}
