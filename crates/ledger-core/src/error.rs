//! Error types for ledger-core operations.

use thiserror::Error;

/// Errors raised by the reconciliation engine.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Weekday text parsed to zero valid days. The caller must re-collect
    /// input; there is no partial acceptance.
    #[error("Invalid weekday input: {0}")]
    InvalidWeekdayInput(String),

    /// A single raw event's markers could not be parsed, or its end
    /// precedes its start. Policy is local recovery: the batch skips the
    /// record and continues.
    #[error("Malformed event record: {0}")]
    MalformedEvent(String),

    /// The contract has no working weekdays, so hours-per-working-day is
    /// undefined. Raised rather than producing an infinite or NaN result.
    #[error("Contract has no working weekdays; expected hours are undefined")]
    DivisionUndefined,

    /// Contract parameters violate their invariants.
    #[error("Invalid contract: {0}")]
    InvalidContract(String),

    /// Report window end precedes its start.
    #[error("Invalid window: {0}")]
    InvalidWindow(String),
}

/// Convenience alias used throughout ledger-core.
pub type Result<T> = std::result::Result<T, LedgerError>;
