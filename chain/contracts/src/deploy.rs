//! Deployment: bootstrap sequence and call routing
//!
//! Deploys the reward token, deploys the bank against it, passes the minter
//! role to the bank and hands it the resulting capability. The sequence runs
//! exactly once per deployment; the token rejects any later attempt to move
//! the minter role.

use tracing::info;
use types::ids::AccountId;
use types::units::Wei;

use crate::bank::Bank;
use crate::clock::{Clock, SystemClock};
use crate::config::BankConfig;
use crate::errors::{DeployError, DepositError, LedgerError, WithdrawError};
use crate::events::ContractEvent;
use crate::native::NativeLedger;
use crate::token::RewardToken;

/// A deployed bank, its reward token and the native ledger they settle on.
#[derive(Debug)]
pub struct Deployment<C: Clock = SystemClock> {
    deployer: AccountId,
    native: NativeLedger,
    token: RewardToken,
    bank: Bank<C>,
}

impl<C: Clock> Deployment<C> {
    /// Run the bootstrap sequence.
    pub fn bootstrap(deployer: AccountId, config: BankConfig, clock: C) -> Result<Self, DeployError> {
        let mut token = RewardToken::new(deployer);
        let mut bank = Bank::new(token.address(), config, clock)?;
        let capability = token.pass_minter_role(&deployer, bank.address())?;
        bank.accept_mint_capability(capability)?;

        info!(
            %deployer,
            token = %token.address(),
            bank = %bank.address(),
            "deployment bootstrapped"
        );

        Ok(Self {
            deployer,
            native: NativeLedger::new(),
            token,
            bank,
        })
    }

    /// Credit an account's native balance.
    pub fn fund(&mut self, account: AccountId, amount: Wei) -> Result<(), LedgerError> {
        self.native.fund(account, amount)
    }

    /// `Bank::deposit` against this deployment's ledger.
    pub fn deposit(&mut self, caller: AccountId, amount: Wei) -> Result<ContractEvent, DepositError> {
        self.bank.deposit(&mut self.native, caller, amount)
    }

    /// `Bank::withdraw` against this deployment's ledger and token.
    pub fn withdraw(&mut self, caller: AccountId) -> Result<ContractEvent, WithdrawError> {
        self.bank.withdraw(&mut self.native, &mut self.token, caller)
    }

    pub fn deployer(&self) -> AccountId {
        self.deployer
    }

    pub fn native(&self) -> &NativeLedger {
        &self.native
    }

    pub fn token(&self) -> &RewardToken {
        &self.token
    }

    /// Direct token access for holder-initiated calls (transfer, approve).
    pub fn token_mut(&mut self) -> &mut RewardToken {
        &mut self.token
    }

    pub fn bank(&self) -> &Bank<C> {
        &self.bank
    }

    /// Drain token and bank events, token first.
    pub fn drain_events(&mut self) -> Vec<ContractEvent> {
        let mut events = self.token.drain_events();
        events.extend(self.bank.drain_events());
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::errors::{ConfigError, TokenError};

    #[test]
    fn test_bootstrap_wires_minter() {
        let deployer = AccountId::new();
        let deployment =
            Deployment::bootstrap(deployer, BankConfig::default(), ManualClock::new(0)).unwrap();

        assert_eq!(deployment.deployer(), deployer);
        assert_eq!(deployment.token().minter(), Some(deployment.bank().address()));
        assert_eq!(deployment.bank().token(), deployment.token().address());
        assert!(deployment.bank().has_mint_capability());
    }

    #[test]
    fn test_bootstrap_cannot_be_repeated_on_token() {
        let deployer = AccountId::new();
        let mut deployment =
            Deployment::bootstrap(deployer, BankConfig::default(), ManualClock::new(0)).unwrap();

        let result = deployment.token_mut().pass_minter_role(&deployer, AccountId::new());
        assert_eq!(result.unwrap_err(), TokenError::MinterRoleLocked);
    }

    #[test]
    fn test_bootstrap_invalid_config() {
        let config = BankConfig {
            seconds_per_year: 0,
            ..BankConfig::default()
        };
        let result = Deployment::bootstrap(AccountId::new(), config, ManualClock::new(0));
        assert!(matches!(
            result,
            Err(DeployError::Config(ConfigError::ZeroSecondsPerYear))
        ));
    }

    #[test]
    fn test_drain_events_order() {
        let clock = ManualClock::new(0);
        let mut deployment =
            Deployment::bootstrap(AccountId::new(), BankConfig::default(), clock.clone()).unwrap();
        let user = AccountId::new();
        deployment.fund(user, 10_000_000_000_000_000).unwrap();
        deployment.deposit(user, 10_000_000_000_000_000).unwrap();
        clock.advance(1);
        deployment.withdraw(user).unwrap();

        let events = deployment.drain_events();
        // MinterChanged, mint Transfer, Deposited, Withdrawn
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], ContractEvent::MinterChanged(_)));
        assert!(matches!(events[1], ContractEvent::Transfer(_)));
        assert!(matches!(events[2], ContractEvent::Deposited(_)));
        assert!(matches!(events[3], ContractEvent::Withdrawn(_)));
    }
}
