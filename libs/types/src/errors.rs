//! Error types for currency unit handling

use thiserror::Error;

/// Errors converting between ether and wei
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitsError {
    #[error("Amount must not be negative: {0}")]
    Negative(String),

    #[error("Amount has more than 18 decimal places: {0}")]
    TooPrecise(String),

    #[error("Amount does not fit in a wei counter: {0}")]
    Overflow(String),

    #[error("Invalid ether amount: {0}")]
    Parse(String),
}
