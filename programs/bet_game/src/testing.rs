//! Test doubles shared by the unit tests.

use std::collections::HashMap;
use std::fmt::Debug;

use anchor_lang::prelude::*;

use crate::errors::BetGameError;
use crate::ledger::TokenLedger;

pub fn assert_error<T: Debug>(result: Result<T>, expected: BetGameError) {
    let err = result.expect_err("expected the call to fail");
    assert_eq!(err, anchor_lang::error::Error::from(expected));
}

/// In-memory token ledger. Allowances are what each owner approved the
/// custodian to pull.
pub struct MemoryLedger {
    custodian: Pubkey,
    balances: HashMap<Pubkey, u64>,
    allowances: HashMap<Pubkey, u64>,
}

impl MemoryLedger {
    pub fn new(custodian: Pubkey) -> Self {
        Self {
            custodian,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    pub fn mint(&mut self, owner: Pubkey, amount: u64) {
        *self.balances.entry(owner).or_default() += amount;
    }

    pub fn approve(&mut self, owner: Pubkey, amount: u64) {
        self.allowances.insert(owner, amount);
    }

    pub fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    pub fn custody_balance(&self) -> u64 {
        self.balance_of(&self.custodian)
    }

    fn move_tokens(&mut self, from: Pubkey, to: Pubkey, amount: u64) -> Result<()> {
        let from_balance = self.balance_of(&from);
        require!(from_balance >= amount, BetGameError::InsufficientBalance);

        self.balances.insert(from, from_balance - amount);
        *self.balances.entry(to).or_default() += amount;
        Ok(())
    }
}

impl TokenLedger for MemoryLedger {
    fn pull(&mut self, owner: &Pubkey, amount: u64) -> Result<()> {
        require!(
            self.balance_of(owner) >= amount,
            BetGameError::InsufficientBalance
        );
        let allowance = self.allowances.get(owner).copied().unwrap_or_default();
        require!(allowance >= amount, BetGameError::InsufficientAllowance);

        let custodian = self.custodian;
        self.move_tokens(*owner, custodian, amount)?;
        self.allowances.insert(*owner, allowance - amount);
        Ok(())
    }

    fn push(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        let custodian = self.custodian;
        self.move_tokens(custodian, *recipient, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pull_consumes_allowance() {
        let custodian = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut ledger = MemoryLedger::new(custodian);
        ledger.mint(owner, 100);
        ledger.approve(owner, 60);

        ledger.pull(&owner, 40).unwrap();
        assert_eq!(ledger.balance_of(&owner), 60);
        assert_eq!(ledger.custody_balance(), 40);

        assert_error(ledger.pull(&owner, 40), BetGameError::InsufficientAllowance);
        assert_eq!(ledger.balance_of(&owner), 60);
    }

    #[test]
    fn push_cannot_overdraw_custody() {
        let mut ledger = MemoryLedger::new(Pubkey::new_unique());
        assert_error(
            ledger.push(&Pubkey::new_unique(), 1),
            BetGameError::InsufficientBalance,
        );
    }
}
