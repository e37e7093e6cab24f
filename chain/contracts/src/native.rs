//! Native ledger: base currency balances
//!
//! Tracks each account's ether balance outside the bank. Deposits move
//! principal from the depositor to the bank's custody address; withdrawals
//! move it back. Transfers conserve the ledger total.

use std::collections::HashMap;

use tracing::debug;
use types::ids::AccountId;
use types::units::Wei;

use crate::errors::LedgerError;

/// Base currency balance map.
///
/// Each ledger carries a fresh identity so a bank can tell which ledger holds
/// its custody balance.
#[derive(Debug, Default)]
pub struct NativeLedger {
    id: AccountId,
    balances: HashMap<AccountId, Wei>,
}

impl NativeLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity of this ledger.
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Credit an account with newly created funds (genesis allocation).
    pub fn fund(&mut self, account: AccountId, amount: Wei) -> Result<(), LedgerError> {
        if account.is_zero() {
            return Err(LedgerError::InvalidRecipient);
        }
        let balance = self.balances.entry(account).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// Balance of an account (zero if unknown).
    pub fn balance_of(&self, account: &AccountId) -> Wei {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Sum of all balances, saturating at `Wei::MAX`.
    pub fn total(&self) -> Wei {
        self.balances
            .values()
            .fold(0, |total, balance| total.saturating_add(*balance))
    }

    /// Validate a transfer without applying it.
    pub fn check_transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: Wei,
    ) -> Result<(), LedgerError> {
        if to.is_zero() {
            return Err(LedgerError::InvalidRecipient);
        }
        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                account: from.to_string(),
                required: amount,
                available,
            });
        }
        if from != to {
            self.balance_of(to)
                .checked_add(amount)
                .ok_or(LedgerError::Overflow)?;
        }
        Ok(())
    }

    /// Move `amount` from one account to another.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Wei,
    ) -> Result<(), LedgerError> {
        self.check_transfer(from, to, amount)?;
        if from == to {
            return Ok(());
        }

        // Both sides were validated above
        let debited = self.balance_of(from) - amount;
        let credited = self.balance_of(to) + amount;
        self.balances.insert(*from, debited);
        self.balances.insert(*to, credited);

        debug!(%from, %to, amount, "native transfer");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledgers_have_distinct_ids() {
        let a = NativeLedger::new();
        let b = NativeLedger::new();
        assert_ne!(a.id(), b.id());
        assert!(!a.id().is_zero());
    }

    #[test]
    fn test_fund_and_balance() {
        let mut ledger = NativeLedger::new();
        let acc = AccountId::new();
        ledger.fund(acc, 100).unwrap();
        ledger.fund(acc, 50).unwrap();
        assert_eq!(ledger.balance_of(&acc), 150);
        assert_eq!(ledger.balance_of(&AccountId::new()), 0);
    }

    #[test]
    fn test_fund_zero_account_rejected() {
        let mut ledger = NativeLedger::new();
        assert_eq!(
            ledger.fund(AccountId::zero(), 1),
            Err(LedgerError::InvalidRecipient)
        );
    }

    #[test]
    fn test_fund_overflow() {
        let mut ledger = NativeLedger::new();
        let acc = AccountId::new();
        ledger.fund(acc, Wei::MAX).unwrap();
        assert_eq!(ledger.fund(acc, 1), Err(LedgerError::Overflow));
        assert_eq!(ledger.balance_of(&acc), Wei::MAX);
    }

    #[test]
    fn test_transfer_moves_funds() {
        let mut ledger = NativeLedger::new();
        let alice = AccountId::new();
        let bob = AccountId::new();
        ledger.fund(alice, 10).unwrap();

        ledger.transfer(&alice, &bob, 4).unwrap();
        assert_eq!(ledger.balance_of(&alice), 6);
        assert_eq!(ledger.balance_of(&bob), 4);
        assert_eq!(ledger.total(), 10);
    }

    #[test]
    fn test_transfer_insufficient() {
        let mut ledger = NativeLedger::new();
        let alice = AccountId::new();
        let bob = AccountId::new();
        ledger.fund(alice, 3).unwrap();

        let result = ledger.transfer(&alice, &bob, 5);
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientBalance {
                required: 5,
                available: 3,
                ..
            })
        ));
        assert_eq!(ledger.balance_of(&alice), 3);
        assert_eq!(ledger.balance_of(&bob), 0);
    }

    #[test]
    fn test_transfer_to_zero_rejected() {
        let mut ledger = NativeLedger::new();
        let alice = AccountId::new();
        ledger.fund(alice, 3).unwrap();
        assert_eq!(
            ledger.transfer(&alice, &AccountId::zero(), 1),
            Err(LedgerError::InvalidRecipient)
        );
    }

    #[test]
    fn test_self_transfer_is_noop() {
        let mut ledger = NativeLedger::new();
        let alice = AccountId::new();
        ledger.fund(alice, 3).unwrap();
        ledger.transfer(&alice, &alice, 3).unwrap();
        assert_eq!(ledger.balance_of(&alice), 3);
    }
}
