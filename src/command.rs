use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use crate::transaction::Amount;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionAction {
    Deposit,
    Withdraw,
}

impl From<TransactionKind> for TransactionAction {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Deposit => Self::Deposit,
            TransactionKind::Withdrawal => Self::Withdraw,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Amount is required for {action:?}")]
    AmountRequired { action: TransactionAction },
}

/// A dated request against an account, as read from the replay input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCommand {
    pub action: TransactionAction,
    pub timestamp: NaiveDateTime,
    pub amount: Amount,
}

impl AccountCommand {
    pub fn parse_command(
        kind: TransactionKind,
        timestamp: NaiveDateTime,
        amount: Option<Amount>,
    ) -> Result<Self, CommandError> {
        let action = TransactionAction::from(kind);
        let Some(amount) = amount else {
            return Err(CommandError::AmountRequired { action });
        };
        // sign and range are the account's business
        Ok(Self {
            action,
            timestamp,
            amount,
        })
    }
}
