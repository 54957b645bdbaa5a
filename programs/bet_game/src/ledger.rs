use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::BetGameError;

/// Token movements in and out of registry custody.
pub trait TokenLedger {
    /// Moves `amount` from `owner` into custody using the allowance `owner`
    /// granted the registry.
    fn pull(&mut self, owner: &Pubkey, amount: u64) -> Result<()>;

    /// Moves `amount` out of custody to `recipient`.
    fn push(&mut self, recipient: &Pubkey, amount: u64) -> Result<()>;
}

/// The fields of a player token account that decide whether the registry
/// may pull from it.
#[derive(Clone, Copy, Debug)]
pub struct PullSource {
    pub owner: Pubkey,
    pub amount: u64,
    pub delegate: COption<Pubkey>,
    pub delegated_amount: u64,
}

impl From<&TokenAccount> for PullSource {
    fn from(account: &TokenAccount) -> Self {
        Self {
            owner: account.owner,
            amount: account.amount,
            delegate: account.delegate,
            delegated_amount: account.delegated_amount,
        }
    }
}

/// Allowance granted to `custodian`. A delegation to anyone else counts as none.
pub fn allowance_for(source: &PullSource, custodian: &Pubkey) -> u64 {
    match source.delegate {
        COption::Some(delegate) if delegate == *custodian => source.delegated_amount,
        _ => 0,
    }
}

/// Owner, then balance, then allowance.
pub fn check_pull(
    source: &PullSource,
    owner: &Pubkey,
    custodian: &Pubkey,
    amount: u64,
) -> Result<()> {
    require_keys_eq!(source.owner, *owner, BetGameError::InvalidTokenAccount);
    require!(source.amount >= amount, BetGameError::InsufficientBalance);
    require!(
        allowance_for(source, custodian) >= amount,
        BetGameError::InsufficientAllowance
    );
    Ok(())
}

pub fn check_push(
    destination_owner: &Pubkey,
    recipient: &Pubkey,
    custody_balance: u64,
    amount: u64,
) -> Result<()> {
    require_keys_eq!(
        *destination_owner,
        *recipient,
        BetGameError::InvalidTokenAccount
    );
    require!(custody_balance >= amount, BetGameError::InsufficientBalance);
    Ok(())
}

/// SPL Token ledger. The registry PDA owns the vault and acts as delegate on
/// player token accounts, so every transfer is signed with the registry seeds.
pub struct SplLedger<'a, 'info> {
    token_program: AccountInfo<'info>,
    vault: &'a Account<'info, TokenAccount>,
    custodian: AccountInfo<'info>,
    counterparty: &'a Account<'info, TokenAccount>,
    signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> SplLedger<'a, 'info> {
    pub fn new(
        token_program: &Program<'info, Token>,
        vault: &'a Account<'info, TokenAccount>,
        custodian: AccountInfo<'info>,
        counterparty: &'a Account<'info, TokenAccount>,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Self {
        Self {
            token_program: token_program.to_account_info(),
            vault,
            custodian,
            counterparty,
            signer_seeds,
        }
    }

    fn transfer(
        &self,
        from: AccountInfo<'info>,
        to: AccountInfo<'info>,
        amount: u64,
    ) -> Result<()> {
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.clone(),
            Transfer {
                from,
                to,
                authority: self.custodian.clone(),
            },
            self.signer_seeds,
        );
        token::transfer(cpi_ctx, amount)
    }
}

impl<'a, 'info> TokenLedger for SplLedger<'a, 'info> {
    fn pull(&mut self, owner: &Pubkey, amount: u64) -> Result<()> {
        let source = self.counterparty;
        check_pull(&PullSource::from(&**source), owner, self.custodian.key, amount)?;

        self.transfer(source.to_account_info(), self.vault.to_account_info(), amount)
    }

    fn push(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        let destination = self.counterparty;
        check_push(&destination.owner, recipient, self.vault.amount, amount)?;

        self.transfer(
            self.vault.to_account_info(),
            destination.to_account_info(),
            amount,
        )
    }
}
