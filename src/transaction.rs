use chrono::NaiveDateTime;

/// Integer currency units.
pub type Amount = i64;

/// One recorded balance change. Positive `amount` is a deposit, negative a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    timestamp: NaiveDateTime,
    amount: Amount,
    balance: Amount,
}

impl Transaction {
    pub(crate) fn new(timestamp: NaiveDateTime, amount: Amount, balance: Amount) -> Self {
        Self {
            timestamp,
            amount,
            balance,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Balance right after this transaction was applied.
    pub fn balance(&self) -> Amount {
        self.balance
    }
}
