//! Error types

use thiserror::Error;

/// Errors the resolution engine can raise.
///
/// Bet validation is the only caller-visible failure; every other input has
/// defined behavior and the engine performs no I/O. The cascade iteration
/// cap is a logged bound, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpinError {
    /// Bet amount outside the accepted range. Not retryable; surfaced
    /// verbatim as a user-facing rejection.
    #[error("bet amount {bet} outside allowed range [{min}, {max}]")]
    InvalidBet { bet: i64, min: i64, max: i64 },
}
