//! Bank configuration
//!
//! The deposit floor and the annual yield the bank pays. The per-second
//! reward rate is derived once, in decimal arithmetic, and then truncated to
//! whole token wei.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::units::Wei;

use crate::errors::ConfigError;
use crate::interest::AccrualRate;

/// 0.01 ether
pub const DEFAULT_MIN_DEPOSIT: Wei = 10_000_000_000_000_000;

/// Year length the default rate is quoted against.
pub const DEFAULT_SECONDS_PER_YEAR: u64 = 31_577_600;

/// Bank configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    /// Smallest accepted deposit, in wei
    pub min_deposit: Wei,
    /// Annual yield as a fraction (0.10 = 10%)
    pub apy: Decimal,
    /// Seconds the APY is spread over
    pub seconds_per_year: u64,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            min_deposit: DEFAULT_MIN_DEPOSIT,
            apy: Decimal::new(10, 2),
            seconds_per_year: DEFAULT_SECONDS_PER_YEAR,
        }
    }
}

impl BankConfig {
    /// Load from JSON; missing fields take their defaults.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot accrue interest.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_deposit == 0 {
            return Err(ConfigError::ZeroMinDeposit);
        }
        if self.apy <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveApy(self.apy.to_string()));
        }
        if self.seconds_per_year == 0 {
            return Err(ConfigError::ZeroSecondsPerYear);
        }
        Ok(())
    }

    /// Reward per second on one minimum deposit:
    /// `floor(min_deposit * apy / seconds_per_year)`.
    pub fn interest_per_second(&self) -> Result<Wei, ConfigError> {
        self.validate()?;

        let unit = Decimal::from_u128(self.min_deposit)
            .ok_or_else(|| ConfigError::Rate(self.min_deposit.to_string()))?;
        unit.checked_mul(self.apy)
            .and_then(|yearly| yearly.checked_div(Decimal::from(self.seconds_per_year)))
            .and_then(|per_second| per_second.floor().to_u128())
            .ok_or_else(|| ConfigError::Rate(format!("{} * {}", self.min_deposit, self.apy)))
    }

    /// The accrual rate the bank applies to every deposit.
    pub fn accrual_rate(&self) -> Result<AccrualRate, ConfigError> {
        Ok(AccrualRate::new(self.interest_per_second()?, self.min_deposit))
    }
}
