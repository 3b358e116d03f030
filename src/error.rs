use thiserror::Error;

use crate::models::amount::Amount;

/// Errors surfaced to the caller of the change-making core.
///
/// None of these are fatal: the presentation layer shows them to the
/// user and lets them try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChangeError {
    #[error("Invalid amount {input:?}: {reason}")]
    InvalidAmount { input: String, reason: String },

    #[error("Amount {value} is out of range ({min} to {max})")]
    OutOfRange {
        value: String,
        min: Amount,
        max: Amount,
    },

    #[error("Cannot make change for {amount}: {remaining} left over with the enabled denominations")]
    NoFeasibleDecomposition { amount: Amount, remaining: Amount },

    #[error("Unknown denomination: {0}")]
    UnknownDenomination(String),

    #[error("Unknown mode {0:?}, expected \"greedy\" or \"random\"")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, ChangeError>;
