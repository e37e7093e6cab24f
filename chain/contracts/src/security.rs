//! Issuance access control
//!
//! The reward token has exactly one minter. The role starts unassigned, the
//! deployer may hand it out once, and from then on it is fixed. Handing out
//! the role yields a `MintCapability`, the typed proof the bank presents when
//! it mints.

use serde::{Deserialize, Serialize};
use types::ids::AccountId;

use crate::errors::TokenError;

/// One-time minter assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinterRole {
    deployer: AccountId,
    minter: Option<AccountId>,
}

impl MinterRole {
    /// Unassigned role owned by `deployer`.
    pub fn new(deployer: AccountId) -> Self {
        Self {
            deployer,
            minter: None,
        }
    }

    /// Account allowed to assign the role.
    pub fn deployer(&self) -> AccountId {
        self.deployer
    }

    /// Current minter, if assigned.
    pub fn minter(&self) -> Option<AccountId> {
        self.minter
    }

    /// Whether the role has been handed out (and is now immutable).
    pub fn is_locked(&self) -> bool {
        self.minter.is_some()
    }

    /// Check if a caller is the minter.
    pub fn is_minter(&self, caller: &AccountId) -> bool {
        self.minter.as_ref() == Some(caller)
    }

    /// Validate an assignment without applying it.
    pub fn check_assign(&self, caller: &AccountId, new_minter: &AccountId) -> Result<(), TokenError> {
        if self.is_locked() {
            return Err(TokenError::MinterRoleLocked);
        }
        if *caller != self.deployer {
            return Err(TokenError::Unauthorized {
                caller: caller.to_string(),
            });
        }
        if new_minter.is_zero() {
            return Err(TokenError::InvalidRecipient);
        }
        Ok(())
    }

    /// Assign the role. Succeeds at most once.
    pub fn assign(&mut self, caller: &AccountId, new_minter: AccountId) -> Result<(), TokenError> {
        self.check_assign(caller, &new_minter)?;
        self.minter = Some(new_minter);
        Ok(())
    }
}

/// Proof that `holder` is the minter of `token`.
///
/// Only the token can create one, and it does so exactly once, when the
/// minter role is assigned. It is neither `Clone` nor
/// deserializable.
#[derive(Debug, PartialEq, Eq)]
pub struct MintCapability {
    token: AccountId,
    holder: AccountId,
}

impl MintCapability {
    pub(crate) fn new(token: AccountId, holder: AccountId) -> Self {
        Self { token, holder }
    }

    /// Token this capability mints on.
    pub fn token(&self) -> AccountId {
        self.token
    }

    /// Account the capability was issued to.
    pub fn holder(&self) -> AccountId {
        self.holder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minter_role_starts_unassigned() {
        let deployer = AccountId::new();
        let role = MinterRole::new(deployer);
        assert_eq!(role.deployer(), deployer);
        assert_eq!(role.minter(), None);
        assert!(!role.is_locked());
        assert!(!role.is_minter(&deployer));
    }

    #[test]
    fn test_minter_role_assign_once() {
        let deployer = AccountId::new();
        let bank = AccountId::new();
        let mut role = MinterRole::new(deployer);

        role.assign(&deployer, bank).unwrap();
        assert!(role.is_minter(&bank));
        assert!(role.is_locked());

        let result = role.assign(&deployer, AccountId::new());
        assert_eq!(result, Err(TokenError::MinterRoleLocked));
        assert!(role.is_minter(&bank));
    }

    #[test]
    fn test_minter_role_non_deployer_rejected() {
        let deployer = AccountId::new();
        let eve = AccountId::new();
        let mut role = MinterRole::new(deployer);

        let result = role.assign(&eve, eve);
        assert!(matches!(result, Err(TokenError::Unauthorized { .. })));
        assert!(!role.is_locked());
    }

    #[test]
    fn test_minter_role_new_minter_cannot_reassign() {
        let deployer = AccountId::new();
        let bank = AccountId::new();
        let mut role = MinterRole::new(deployer);
        role.assign(&deployer, bank).unwrap();

        let result = role.assign(&bank, AccountId::new());
        assert_eq!(result, Err(TokenError::MinterRoleLocked));
    }

    #[test]
    fn test_minter_role_zero_minter_rejected() {
        let deployer = AccountId::new();
        let mut role = MinterRole::new(deployer);
        assert_eq!(
            role.assign(&deployer, AccountId::zero()),
            Err(TokenError::InvalidRecipient)
        );
        assert!(!role.is_locked());
    }

    #[test]
    fn test_capability_accessors() {
        let token = AccountId::new();
        let holder = AccountId::new();
        let cap = MintCapability::new(token, holder);
        assert_eq!(cap.token(), token);
        assert_eq!(cap.holder(), holder);
    }
}
