use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::BetGameError;
use crate::events::FeesWithdrawn;
use crate::ledger::SplLedger;
use crate::state::Registry;

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    #[account(
        mut,
        seeds = [Registry::SEED],
        bump = registry.bump,
        has_one = admin @ BetGameError::Unauthorized,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        address = registry.vault @ BetGameError::InvalidTokenAccount,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = admin_token_account.mint == registry.mint @ BetGameError::InvalidTokenAccount,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<WithdrawFees>, amount: u64) -> Result<()> {
    let bump_bytes = [ctx.accounts.registry.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[Registry::SEED, &bump_bytes]];

    let mut ledger = SplLedger::new(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        ctx.accounts.registry.to_account_info(),
        &ctx.accounts.admin_token_account,
        signer_seeds,
    );

    let registry = &mut ctx.accounts.registry;
    let cap = registry.authorize(&ctx.accounts.admin.key())?;
    let remaining = registry.withdraw_fees(&cap, amount, &mut ledger)?;

    msg!("Withdrew {} in fees, {} left", amount, remaining);

    emit!(FeesWithdrawn {
        recipient: ctx.accounts.admin.key(),
        amount,
        remaining,
    });

    Ok(())
}
