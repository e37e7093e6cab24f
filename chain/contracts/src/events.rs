//! Contract events
//!
//! Events are immutable records appended by contract operations. Each
//! contract keeps its own append-only log; external observers read or drain
//! it without the contracts depending on them.

use serde::{Deserialize, Serialize};
use types::ids::AccountId;
use types::units::Wei;

/// The token's minter role moved to a new account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinterChanged {
    pub token: AccountId,
    pub from: AccountId,
    pub to: AccountId,
}

/// Tokens moved between accounts. Mints use the zero account as `from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Wei,
}

/// An owner set a spender's allowance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub owner: AccountId,
    pub spender: AccountId,
    pub amount: Wei,
}

/// Principal accepted into custody
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposited {
    pub account: AccountId,
    pub amount: Wei,
    pub timestamp: u64,
}

/// Principal returned and interest minted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawn {
    pub account: AccountId,
    pub principal: Wei,
    pub interest: Wei,
    /// Seconds the principal spent in custody
    pub elapsed: u64,
}

/// Enum wrapper for all contract events, enabling uniform handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractEvent {
    MinterChanged(MinterChanged),
    Transfer(Transfer),
    Approval(Approval),
    Deposited(Deposited),
    Withdrawn(Withdrawn),
}
