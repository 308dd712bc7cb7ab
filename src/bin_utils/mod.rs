//! Bootstraps [`account_ledger`](crate) for the binary: replays a CSV list of
//! dated commands against one account and prints its statement.

use std::io::{Read, Write};

use crate::{
    account::{Account, LedgerError},
    clock::ManualClock,
    command::{AccountCommand, CommandError},
};
use anyhow::{Context, Result};
use csv_parser::{CommandRow, CsvCommandParser};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
pub mod csv_parser;

/// Diagnostics level for the binary. Fixed, the environment is not consulted.
pub const LOG_DIRECTIVE: &str = "warn";

pub fn log_filter() -> EnvFilter {
    EnvFilter::new(LOG_DIRECTIVE)
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Malformed row: {0}")]
    ParseErr(#[from] csv::Error),
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    LedgerErr(#[from] LedgerError),
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, ReplayError) + 'w>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvCommandParser::new(self.input);

        let clock = ManualClock::default();
        let mut account = Account::new(&clock);

        for (line, row) in parser {
            if let Err(err) = replay_row(&clock, &mut account, row) {
                (self.error_printer)(line, err);
            }
        }
        tracing::info!(
            transactions = account.transactions().len(),
            balance = account.balance(),
            "replay finished"
        );

        account
            .write_statement(self.output)
            .context("Failed to write statement")?;
        self.output.flush().context("Failed to flush output")
    }
}

fn replay_row(
    clock: &ManualClock,
    account: &mut Account<&ManualClock>,
    row: csv::Result<CommandRow>,
) -> Result<(), ReplayError> {
    let row = row?;
    let cmd = AccountCommand::parse_command(row.kind, row.timestamp, row.amount)?;
    clock.set(cmd.timestamp);
    account.execute(cmd.action, cmd.amount)?;
    Ok(())
}
