use std::fmt;

use crate::transaction::Transaction;

pub const STATEMENT_HEADER: &str = "date       || Amount || balance";
pub const NO_TRANSACTIONS: &str = "No transactions to display";
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Printable view of an account history, most recent transaction first.
#[derive(Debug)]
pub struct Statement<'a> {
    lines: Vec<&'a Transaction>,
}

impl<'a> Statement<'a> {
    /// `transactions` must be in the order they were recorded.
    pub fn new(transactions: &'a [Transaction]) -> Self {
        // reversing first keeps later records on top when timestamps are equal
        let mut lines: Vec<_> = transactions.iter().rev().collect();
        lines.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn transactions(&self) -> impl Iterator<Item = &'a Transaction> + '_ {
        self.lines.iter().copied()
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{NO_TRANSACTIONS}");
        }
        writeln!(f, "{STATEMENT_HEADER}")?;
        for tx in &self.lines {
            writeln!(
                f,
                "{} || {} || {}",
                tx.timestamp().format(DATE_FORMAT),
                tx.amount(),
                tx.balance()
            )?;
        }
        Ok(())
    }
}
