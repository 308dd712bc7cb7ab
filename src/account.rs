use std::io::{self, Write};

use thiserror::Error;

use crate::{
    clock::Clock,
    command::TransactionAction,
    statement::Statement,
    transaction::{Amount, Transaction},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("{action:?} amount must be positive, got {amount}")]
    InvalidArgument {
        action: TransactionAction,
        amount: Amount,
    },
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Amount,
        available: Amount,
    },
    #[error("Depositing {amount} would overflow balance {balance}")]
    BalanceOverflow { balance: Amount, amount: Amount },
}

/// Single account: running balance plus its append-only history.
#[derive(Debug)]
pub struct Account<C> {
    clock: C,
    balance: Amount,
    transactions: Vec<Transaction>,
}

impl<C: Clock> Account<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            balance: 0,
            transactions: Vec::new(),
        }
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Transactions in the order they were recorded.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<Transaction, LedgerError> {
        self.execute(TransactionAction::Deposit, amount)
    }

    pub fn withdraw(&mut self, amount: Amount) -> Result<Transaction, LedgerError> {
        self.execute(TransactionAction::Withdraw, amount)
    }

    pub fn execute(
        &mut self,
        action: TransactionAction,
        amount: Amount,
    ) -> Result<Transaction, LedgerError> {
        let tx = match self.handle(action, amount) {
            Ok(tx) => tx,
            Err(err) => {
                tracing::warn!(?action, amount, balance = self.balance, "rejected: {err}");
                return Err(err);
            }
        };
        self.apply(tx);
        Ok(tx)
    }

    /// Validates the request and builds the transaction without touching state.
    fn handle(
        &self,
        action: TransactionAction,
        amount: Amount,
    ) -> Result<Transaction, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidArgument { action, amount });
        }
        let (signed, balance) = match action {
            TransactionAction::Deposit => {
                let Some(balance) = self.balance.checked_add(amount) else {
                    return Err(LedgerError::BalanceOverflow {
                        balance: self.balance,
                        amount,
                    });
                };
                (amount, balance)
            }
            TransactionAction::Withdraw => {
                if amount > self.balance {
                    return Err(LedgerError::InsufficientFunds {
                        requested: amount,
                        available: self.balance,
                    });
                }
                (-amount, self.balance - amount)
            }
        };
        Ok(Transaction::new(self.clock.now(), signed, balance))
    }

    fn apply(&mut self, tx: Transaction) {
        tracing::debug!(
            timestamp = %tx.timestamp(),
            amount = tx.amount(),
            balance = tx.balance(),
            "transaction recorded"
        );
        self.balance = tx.balance();
        self.transactions.push(tx);
    }

    pub fn statement(&self) -> Statement<'_> {
        Statement::new(&self.transactions)
    }

    pub fn write_statement<W: Write>(&self, output: &mut W) -> io::Result<()> {
        write!(output, "{}", self.statement())
    }

    pub fn print_statement(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_statement(&mut lock)?;
        lock.flush()
    }
}
