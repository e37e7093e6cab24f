//! Contract-specific error types
//!
//! Error taxonomy for the reward token, the native ledger, and the bank's
//! deposit and withdrawal paths. Every error is a pure rejection: the
//! operation that returns it has not mutated any ledger.

use thiserror::Error;
use types::units::Wei;

/// Reward token errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    #[error("Unauthorized: {caller} may not perform this action")]
    Unauthorized { caller: String },

    #[error("Minter role has already been assigned")]
    MinterRoleLocked,

    #[error("Insufficient token balance: required {required}, available {available}")]
    InsufficientBalance { required: Wei, available: Wei },

    #[error("Insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance { required: Wei, available: Wei },

    #[error("Invalid recipient: the zero account cannot receive tokens")]
    InvalidRecipient,

    #[error("Arithmetic overflow in token balance calculation")]
    Overflow,
}

impl TokenError {
    /// Whether this is a rejection of a privileged action (wrong caller or a
    /// repeated minter assignment).
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::MinterRoleLocked)
    }
}

/// Native (base currency) ledger errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Insufficient balance for {account}: required {required}, available {available}")]
    InsufficientBalance {
        account: String,
        required: Wei,
        available: Wei,
    },

    #[error("Invalid recipient: the zero account cannot receive funds")]
    InvalidRecipient,

    #[error("Arithmetic overflow in balance calculation")]
    Overflow,
}

/// Deposit errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DepositError {
    #[error("Deposit too small: {amount} is below the minimum of {minimum}")]
    TooSmall { amount: Wei, minimum: Wei },

    #[error("Account {account} already has an active deposit")]
    AlreadyDeposited { account: String },

    #[error("The bank's custody address cannot open a deposit")]
    InvalidDepositor,

    #[error("Ledger does not match the ledger holding this bank's custody")]
    LedgerMismatch,

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Arithmetic overflow in custody total")]
    Overflow,
}

/// Withdrawal errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WithdrawError {
    #[error("Account {account} has no active deposit")]
    NoDeposit { account: String },

    #[error("Bank has not been granted the minter role")]
    MintCapabilityMissing,

    #[error("Token does not match the token this bank was deployed against")]
    TokenMismatch,

    #[error("Ledger does not match the ledger holding this bank's custody")]
    LedgerMismatch,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Arithmetic overflow in interest calculation")]
    Overflow,
}

/// Bank setup errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BankError {
    #[error("Mint capability is bound to {holder}, not this bank")]
    CapabilityMismatch { holder: String },

    #[error("Bank already holds a mint capability")]
    CapabilityAlreadyHeld,
}

/// Bank configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Minimum deposit must be positive")]
    ZeroMinDeposit,

    #[error("APY must be positive: {0}")]
    NonPositiveApy(String),

    #[error("Seconds per year must be positive")]
    ZeroSecondsPerYear,

    #[error("Interest rate cannot be represented: {0}")]
    Rate(String),

    #[error("Invalid configuration: {0}")]
    Parse(String),
}

/// Bootstrap errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeployError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Bank error: {0}")]
    Bank(#[from] BankError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_error_display() {
        let err = DepositError::TooSmall {
            amount: 9,
            minimum: 10,
        };
        assert_eq!(err.to_string(), "Deposit too small: 9 is below the minimum of 10");
    }

    #[test]
    fn test_token_error_authorization_class() {
        assert!(TokenError::MinterRoleLocked.is_authorization());
        assert!(TokenError::Unauthorized {
            caller: "eve".to_string()
        }
        .is_authorization());
        assert!(!TokenError::InvalidRecipient.is_authorization());
        assert!(!TokenError::Overflow.is_authorization());
    }

    #[test]
    fn test_withdraw_error_from_token() {
        let err: WithdrawError = TokenError::MinterRoleLocked.into();
        assert!(matches!(err, WithdrawError::Token(_)));
        assert!(err.to_string().contains("already been assigned"));
    }

    #[test]
    fn test_deposit_error_from_ledger() {
        let err: DepositError = LedgerError::Overflow.into();
        assert!(matches!(err, DepositError::Ledger(LedgerError::Overflow)));
    }
}
