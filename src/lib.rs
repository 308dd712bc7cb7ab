/// Single account ledger: running balance plus append-only history.
/// Every change is validated first and only then recorded.
pub mod account;

/// Injectable time sources, so recorded timestamps are deterministic under test.
pub mod clock;

/// Immutable transaction records and the integer [`transaction::Amount`] type.
pub mod transaction;

/// Reverse-chronological statement rendering.
pub mod statement;

/// Dated account commands, as produced by the CSV replay in [`bin_utils`].
pub mod command;

/// Replay driver used by the binary. Lives in the library so the
/// integration tests can run it end to end.
pub mod bin_utils;

pub use account::{Account, LedgerError};
pub use clock::{Clock, ManualClock, SystemClock};
pub use statement::Statement;
pub use transaction::{Amount, Transaction};
