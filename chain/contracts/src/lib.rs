//! Contract Logic for the Interest Bank
//!
//! This crate implements the contract layer for a time-locked deposit bank
//! that pays interest in its own reward token (KIT).
//!
//! # Modules
//! - `errors`: Contract-specific error types
//! - `events`: Contract events (minter changes, transfers, deposits, withdrawals)
//! - `security`: One-time minter role and the mint capability it yields
//! - `clock`: Injected time source
//! - `config`: Bank configuration and rate derivation
//! - `interest`: Simple-interest accrual
//! - `native`: Base currency ledger
//! - `token`: Reward token with restricted issuance
//! - `bank`: Custodian holding deposits and minting interest
//! - `deploy`: Bootstrap sequence and call routing
//!
//! # Version
//! v0.1.0: initial implementation

pub mod errors;
pub mod events;
pub mod security;
pub mod clock;
pub mod config;
pub mod interest;
pub mod native;
pub mod token;
pub mod bank;
pub mod deploy;
