use std::{
    fs::File,
    io::{self, Read},
};

use account_ledger::bin_utils::{ReplayError, Service, log_filter};
use anyhow::{Context, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let input: Box<dyn Read> = match std::env::args().nth(1) {
        Some(filename) => Box::new(
            File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?,
        ),
        None => Box::new(io::stdin().lock()),
    };

    let service = Service {
        input,
        output: &mut io::stdout().lock(),
        error_printer: Box::new(|line, err| {
            match err {
                ReplayError::LedgerErr(_) => {
                    // rejected operations are already logged by the account
                }
                err => eprintln!("Error at line {line}: {err}"),
            }
        }),
    };
    service.run()
}
