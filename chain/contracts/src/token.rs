//! Reward Token: fungible ledger with a single authorized minter
//!
//! Implements the KIT reward token:
//! - Balance tracking and total supply
//! - One-time minter assignment by the deployer
//! - Minting gated on the minter (directly or via `MintCapability`)
//! - Standard transfer, approve and transfer-from

use std::collections::HashMap;

use tracing::{debug, info, warn};
use types::ids::AccountId;
use types::units::Wei;

use crate::errors::TokenError;
use crate::events::{Approval, ContractEvent, MinterChanged, Transfer};
use crate::security::{MintCapability, MinterRole};

pub const TOKEN_NAME: &str = "Kitty Token";
pub const TOKEN_SYMBOL: &str = "KIT";
pub const TOKEN_DECIMALS: u8 = 18;

/// Reward token contract.
///
/// `total_supply` always equals the sum of all balances, and since there is
/// no burn it never decreases.
#[derive(Debug)]
pub struct RewardToken {
    /// The token contract's own address
    address: AccountId,
    balances: HashMap<AccountId, Wei>,
    /// Allowances: (owner, spender) -> amount
    allowances: HashMap<(AccountId, AccountId), Wei>,
    total_supply: Wei,
    minter_role: MinterRole,
    /// Emitted events log (append-only)
    events: Vec<ContractEvent>,
}

impl RewardToken {
    /// Deploy a token at a fresh address. The minter starts unassigned.
    pub fn new(deployer: AccountId) -> Self {
        Self::with_address(AccountId::new(), deployer)
    }

    /// Deploy a token at a known address.
    pub fn with_address(address: AccountId, deployer: AccountId) -> Self {
        info!(token = %address, %deployer, "RewardToken deployed");
        Self {
            address,
            balances: HashMap::new(),
            allowances: HashMap::new(),
            total_supply: 0,
            minter_role: MinterRole::new(deployer),
            events: Vec::new(),
        }
    }

    // ───────────────────────── Metadata ─────────────────────────

    pub fn address(&self) -> AccountId {
        self.address
    }

    pub fn name(&self) -> &'static str {
        TOKEN_NAME
    }

    pub fn symbol(&self) -> &'static str {
        TOKEN_SYMBOL
    }

    pub fn decimals(&self) -> u8 {
        TOKEN_DECIMALS
    }

    pub fn deployer(&self) -> AccountId {
        self.minter_role.deployer()
    }

    /// Current minter, `None` until the role is passed.
    pub fn minter(&self) -> Option<AccountId> {
        self.minter_role.minter()
    }

    // ───────────────────────── Minter Role ─────────────────────────

    /// Hand the minter role to `new_minter`. Deployer-only, once.
    ///
    /// Returns the capability the new minter uses to mint.
    pub fn pass_minter_role(
        &mut self,
        caller: &AccountId,
        new_minter: AccountId,
    ) -> Result<MintCapability, TokenError> {
        if let Err(err) = self.minter_role.assign(caller, new_minter) {
            warn!(token = %self.address, %caller, error = %err, "minter role change rejected");
            return Err(err);
        }

        self.events.push(ContractEvent::MinterChanged(MinterChanged {
            token: self.address,
            from: *caller,
            to: new_minter,
        }));
        info!(token = %self.address, minter = %new_minter, "minter role assigned");

        Ok(MintCapability::new(self.address, new_minter))
    }

    // ───────────────────────── Mint ─────────────────────────

    /// Validate a mint without applying it.
    pub fn check_mint(&self, caller: &AccountId, to: &AccountId, amount: Wei) -> Result<(), TokenError> {
        if !self.minter_role.is_minter(caller) {
            return Err(TokenError::Unauthorized {
                caller: caller.to_string(),
            });
        }
        if to.is_zero() {
            return Err(TokenError::InvalidRecipient);
        }
        self.total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        self.balance_of(to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        Ok(())
    }

    /// Create `amount` new tokens for `to`. Minter-only.
    pub fn mint(
        &mut self,
        caller: &AccountId,
        to: AccountId,
        amount: Wei,
    ) -> Result<ContractEvent, TokenError> {
        if let Err(err) = self.check_mint(caller, &to, amount) {
            if err.is_authorization() {
                warn!(token = %self.address, %caller, "unauthorized mint rejected");
            }
            return Err(err);
        }

        // Validated above: neither sum overflows
        self.total_supply += amount;
        *self.balances.entry(to).or_insert(0) += amount;

        let event = ContractEvent::Transfer(Transfer {
            from: AccountId::zero(),
            to,
            amount,
        });
        self.events.push(event.clone());
        debug!(token = %self.address, %to, amount, "minted");
        Ok(event)
    }

    /// Validate a capability-backed mint without applying it.
    pub fn check_mint_with(
        &self,
        capability: &MintCapability,
        to: &AccountId,
        amount: Wei,
    ) -> Result<(), TokenError> {
        if capability.token() != self.address {
            return Err(TokenError::Unauthorized {
                caller: capability.holder().to_string(),
            });
        }
        self.check_mint(&capability.holder(), to, amount)
    }

    /// Mint on behalf of the capability holder.
    pub fn mint_with(
        &mut self,
        capability: &MintCapability,
        to: AccountId,
        amount: Wei,
    ) -> Result<ContractEvent, TokenError> {
        if capability.token() != self.address {
            return Err(TokenError::Unauthorized {
                caller: capability.holder().to_string(),
            });
        }
        self.mint(&capability.holder(), to, amount)
    }

    // ───────────────────────── Transfers ─────────────────────────

    /// Move `amount` of the caller's tokens to `to`.
    pub fn transfer(
        &mut self,
        caller: &AccountId,
        to: AccountId,
        amount: Wei,
    ) -> Result<ContractEvent, TokenError> {
        self.move_balance(caller, &to, amount)?;

        let event = ContractEvent::Transfer(Transfer {
            from: *caller,
            to,
            amount,
        });
        self.events.push(event.clone());
        Ok(event)
    }

    /// Set `spender`'s allowance over the owner's tokens.
    pub fn approve(
        &mut self,
        owner: &AccountId,
        spender: AccountId,
        amount: Wei,
    ) -> Result<ContractEvent, TokenError> {
        if spender.is_zero() {
            return Err(TokenError::InvalidRecipient);
        }
        self.allowances.insert((*owner, spender), amount);

        let event = ContractEvent::Approval(Approval {
            owner: *owner,
            spender,
            amount,
        });
        self.events.push(event.clone());
        Ok(event)
    }

    /// Remaining amount `spender` may move out of `owner`'s balance.
    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Wei {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(0)
    }

    /// Move tokens out of `from` using the caller's allowance.
    pub fn transfer_from(
        &mut self,
        spender: &AccountId,
        from: AccountId,
        to: AccountId,
        amount: Wei,
    ) -> Result<ContractEvent, TokenError> {
        let allowed = self.allowance(&from, spender);
        if allowed < amount {
            return Err(TokenError::InsufficientAllowance {
                required: amount,
                available: allowed,
            });
        }

        self.move_balance(&from, &to, amount)?;
        self.allowances.insert((from, *spender), allowed - amount);

        let event = ContractEvent::Transfer(Transfer { from, to, amount });
        self.events.push(event.clone());
        Ok(event)
    }

    fn move_balance(&mut self, from: &AccountId, to: &AccountId, amount: Wei) -> Result<(), TokenError> {
        if to.is_zero() {
            return Err(TokenError::InvalidRecipient);
        }
        let available = self.balance_of(from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        if from == to {
            return Ok(());
        }

        // Cannot overflow: every balance is bounded by total_supply
        self.balances.insert(*from, available - amount);
        *self.balances.entry(*to).or_insert(0) += amount;
        debug!(token = %self.address, %from, %to, amount, "transferred");
        Ok(())
    }

    // ───────────────────────── Balance Queries ─────────────────────────

    pub fn balance_of(&self, account: &AccountId) -> Wei {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> Wei {
        self.total_supply
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
