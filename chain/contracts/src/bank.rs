//! Bank: time-locked deposits paying interest in reward tokens
//!
//! Implements the custodian:
//! - One active deposit per account, at least `min_deposit`
//! - Principal held at the bank's custody address on the native ledger
//! - Simple interest from elapsed seconds, minted as KIT on withdrawal
//! - All-or-nothing withdrawal: principal return, mint and record clear
//!   either all happen or none do

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use types::ids::AccountId;
use types::units::Wei;

use crate::clock::{Clock, SystemClock};
use crate::config::BankConfig;
use crate::errors::{BankError, ConfigError, DepositError, WithdrawError};
use crate::events::{ContractEvent, Deposited, Withdrawn};
use crate::interest::AccrualRate;
use crate::native::NativeLedger;
use crate::security::MintCapability;
use crate::token::RewardToken;

/// An account's active deposit.
///
/// Absence of a record is the "no deposit" state; queries report it as
/// principal 0 and start time 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRecord {
    pub principal: Wei,
    pub start_time: u64,
}

/// Custodian contract.
#[derive(Debug)]
pub struct Bank<C: Clock = SystemClock> {
    /// Custody address on the native ledger
    address: AccountId,
    /// Address of the token the bank mints rewards on
    token: AccountId,
    config: BankConfig,
    rate: AccrualRate,
    clock: C,
    /// Active deposits by account
    records: HashMap<AccountId, DepositRecord>,
    /// Sum of active principals
    total_custody: Wei,
    mint_capability: Option<MintCapability>,
    /// Native ledger holding custody, bound by the first deposit
    ledger: Option<AccountId>,
    /// Emitted events log (append-only)
    events: Vec<ContractEvent>,
}

impl<C: Clock> Bank<C> {
    /// Deploy a bank at a fresh address, minting rewards on `token`.
    pub fn new(token: AccountId, config: BankConfig, clock: C) -> Result<Self, ConfigError> {
        Self::with_address(AccountId::new(), token, config, clock)
    }

    /// Deploy a bank at a known address.
    pub fn with_address(
        address: AccountId,
        token: AccountId,
        config: BankConfig,
        clock: C,
    ) -> Result<Self, ConfigError> {
        let rate = config.accrual_rate()?;
        info!(
            bank = %address,
            %token,
            min_deposit = config.min_deposit,
            interest_per_second = rate.per_second,
            "Bank deployed"
        );

        Ok(Self {
            address,
            token,
            config,
            rate,
            clock,
            records: HashMap::new(),
            total_custody: 0,
            mint_capability: None,
            ledger: None,
            events: Vec::new(),
        })
    }

    // ───────────────────────── Setup ─────────────────────────

    /// Take custody of the token's mint capability.
    ///
    /// The capability must have been issued to this bank by the token it was
    /// deployed against.
    pub fn accept_mint_capability(&mut self, capability: MintCapability) -> Result<(), BankError> {
        if self.mint_capability.is_some() {
            return Err(BankError::CapabilityAlreadyHeld);
        }
        if capability.holder() != self.address || capability.token() != self.token {
            return Err(BankError::CapabilityMismatch {
                holder: capability.holder().to_string(),
            });
        }
        info!(bank = %self.address, token = %self.token, "mint capability accepted");
        self.mint_capability = Some(capability);
        Ok(())
    }

    /// Whether the bank can mint rewards.
    pub fn has_mint_capability(&self) -> bool {
        self.mint_capability.is_some()
    }

    // ───────────────────────── Deposit ─────────────────────────

    /// Lock `amount` of the caller's native balance with the bank.
    ///
    /// Validates: caller is not the custody address, the ledger is the one
    /// holding custody, no active deposit, amount at least `min_deposit`,
    /// caller can cover the amount. The first deposit binds the bank to
    /// `native`. Emits `Deposited`.
    pub fn deposit(
        &mut self,
        native: &mut NativeLedger,
        caller: AccountId,
        amount: Wei,
    ) -> Result<ContractEvent, DepositError> {
        if caller == self.address {
            warn!(bank = %self.address, "deposit from custody address rejected");
            return Err(DepositError::InvalidDepositor);
        }
        if self.ledger.is_some_and(|ledger| ledger != native.id()) {
            return Err(DepositError::LedgerMismatch);
        }
        if self.records.contains_key(&caller) {
            return Err(DepositError::AlreadyDeposited {
                account: caller.to_string(),
            });
        }
        if amount < self.config.min_deposit {
            return Err(DepositError::TooSmall {
                amount,
                minimum: self.config.min_deposit,
            });
        }
        let total_custody = self
            .total_custody
            .checked_add(amount)
            .ok_or(DepositError::Overflow)?;

        native.transfer(&caller, &self.address, amount)?;

        self.ledger = Some(native.id());
        let timestamp = self.clock.now();
        self.records.insert(
            caller,
            DepositRecord {
                principal: amount,
                start_time: timestamp,
            },
        );
        self.total_custody = total_custody;

        let event = ContractEvent::Deposited(Deposited {
            account: caller,
            amount,
            timestamp,
        });
        self.events.push(event.clone());
        info!(bank = %self.address, account = %caller, amount, timestamp, "deposit accepted");
        Ok(event)
    }

    // ───────────────────────── Withdraw ─────────────────────────

    /// Return the caller's principal and mint the accrued interest.
    ///
    /// Every step is validated before anything is applied, so a failure
    /// leaves the bank, the native ledger and the token untouched.
    /// Emits `Withdrawn`.
    pub fn withdraw(
        &mut self,
        native: &mut NativeLedger,
        token: &mut RewardToken,
        caller: AccountId,
    ) -> Result<ContractEvent, WithdrawError> {
        let record = self
            .records
            .get(&caller)
            .copied()
            .ok_or_else(|| WithdrawError::NoDeposit {
                account: caller.to_string(),
            })?;

        let capability = match self.mint_capability.as_ref() {
            Some(capability) => capability,
            None => {
                warn!(bank = %self.address, "withdrawal attempted before minter role was granted");
                return Err(WithdrawError::MintCapabilityMissing);
            }
        };
        if token.address() != self.token {
            return Err(WithdrawError::TokenMismatch);
        }
        if self.ledger != Some(native.id()) {
            return Err(WithdrawError::LedgerMismatch);
        }

        let elapsed = self.clock.now().saturating_sub(record.start_time);
        let interest = self
            .rate
            .accrue(record.principal, elapsed)
            .ok_or(WithdrawError::Overflow)?;

        native.check_transfer(&self.address, &caller, record.principal)?;
        token.check_mint_with(capability, &caller, interest)?;

        // Validated above; neither call can fail from here on
        native.transfer(&self.address, &caller, record.principal)?;
        token.mint_with(capability, caller, interest)?;

        self.records.remove(&caller);
        self.total_custody -= record.principal;

        let event = ContractEvent::Withdrawn(Withdrawn {
            account: caller,
            principal: record.principal,
            interest,
            elapsed,
        });
        self.events.push(event.clone());
        info!(
            bank = %self.address,
            account = %caller,
            principal = record.principal,
            interest,
            elapsed,
            "withdrawal completed"
        );
        Ok(event)
    }

    // ───────────────────────── Queries ─────────────────────────

    /// Whether the account has an active deposit.
    pub fn is_deposited(&self, account: &AccountId) -> bool {
        self.records.contains_key(account)
    }

    /// Principal of the active deposit, 0 if none.
    pub fn wei_balance_of(&self, account: &AccountId) -> Wei {
        self.records.get(account).map_or(0, |r| r.principal)
    }

    /// Start time of the active deposit, 0 if none.
    pub fn deposit_start(&self, account: &AccountId) -> u64 {
        self.records.get(account).map_or(0, |r| r.start_time)
    }

    /// The active deposit record, if any.
    pub fn deposit_record(&self, account: &AccountId) -> Option<DepositRecord> {
        self.records.get(account).copied()
    }

    /// Interest a withdrawal would mint right now, 0 if no deposit.
    pub fn accrued_interest(&self, account: &AccountId) -> Result<Wei, WithdrawError> {
        match self.records.get(account) {
            Some(record) => {
                let elapsed = self.clock.now().saturating_sub(record.start_time);
                self.rate
                    .accrue(record.principal, elapsed)
                    .ok_or(WithdrawError::Overflow)
            }
            None => Ok(0),
        }
    }

    /// Sum of all active principals.
    pub fn total_custody(&self) -> Wei {
        self.total_custody
    }

    /// Number of accounts with an active deposit.
    pub fn active_deposits(&self) -> usize {
        self.records.len()
    }

    pub fn address(&self) -> AccountId {
        self.address
    }

    /// Address of the reward token.
    pub fn token(&self) -> AccountId {
        self.token
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn rate(&self) -> AccrualRate {
        self.rate
    }

    // ───────────────────────── Events ─────────────────────────

    /// Get all emitted events.
    pub fn events(&self) -> &[ContractEvent] {
        &self.events
    }

    /// Drain all events (consume and clear).
    pub fn drain_events(&mut self) -> Vec<ContractEvent> {
        std::mem::take(&mut self.events)
    }
}
