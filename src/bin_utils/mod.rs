//! Bootstraps a [`Teller`] from a CSV script of operations, shared by the binary
//! and the integration tests.

use std::io::{Read, Write};

use crate::{
    journal::TransactionLog,
    processor::{TransactionProcessError, TransactionProcessor, teller::Teller},
};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use script_parser::CsvScriptParser;
use tracing::info;

pub mod script_parser;

pub struct Service<'w, R, W: 'w, L> {
    pub input: R,
    pub output: &'w mut W,
    pub teller: Teller<L>,
    pub error_printer: Box<dyn FnMut(u64, TransactionProcessError)>,
}

impl<'w, R, W, L> Service<'w, R, W, L>
where
    R: Read,
    W: Write + 'w,
    L: TransactionLog,
{
    /// Applies every row in order and prints the final balance.
    pub fn run(mut self) -> Result<Decimal> {
        let parser = CsvScriptParser::new(self.input);

        for (line, row) in parser {
            let row = row.with_context(|| format!("Failed to parse script at line {line}"))?;
            if let Err(err) = self.teller.process_transaction(row.kind, row.amount) {
                (self.error_printer)(line, err);
            }
        }

        let balance = self.teller.balance();
        info!(holder = self.teller.account().holder(), %balance, "script finished");
        writeln!(self.output, "Final Balance: {balance}")
            .context("Failed to write final balance")?;
        Ok(balance)
    }
}
