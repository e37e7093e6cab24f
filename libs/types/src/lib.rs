//! Types library for the interest bank
//!
//! Core identifier and currency-unit definitions shared by the bank and
//! reward token contracts.
//!
//! # Modules
//! - `ids`: Account identifiers (`AccountId`, including the null account)
//! - `units`: Wei amounts and ether conversions
//! - `errors`: Error taxonomy for unit parsing and conversion

pub mod ids;
pub mod units;
pub mod errors;

