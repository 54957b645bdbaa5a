use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::BetGameError;
use crate::events::PoolSettled;
use crate::ledger::SplLedger;
use crate::state::{Pool, Registry};

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct SettlePool<'info> {
    #[account(
        mut,
        seeds = [Registry::SEED],
        bump = registry.bump,
        has_one = admin @ BetGameError::Unauthorized,
        constraint = pool_id < registry.pool_count @ BetGameError::PoolNotFound,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [Pool::SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        address = registry.vault @ BetGameError::InvalidTokenAccount,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Winner's token account; its owner must match the declared winner.
    #[account(
        mut,
        constraint = winner_token_account.mint == registry.mint @ BetGameError::InvalidTokenAccount,
    )]
    pub winner_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<SettlePool>, pool_id: u64, winner: Pubkey) -> Result<()> {
    let bump_bytes = [ctx.accounts.registry.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[Registry::SEED, &bump_bytes]];

    let mut ledger = SplLedger::new(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        ctx.accounts.registry.to_account_info(),
        &ctx.accounts.winner_token_account,
        signer_seeds,
    );

    let registry = &mut ctx.accounts.registry;
    let cap = registry.authorize(&ctx.accounts.admin.key())?;
    let split = registry.settle(&cap, &mut ctx.accounts.pool, winner, &mut ledger)?;

    msg!(
        "Pool {} settled: {} paid to {}, {} retained",
        pool_id,
        split.payout,
        winner,
        split.retained
    );

    emit!(PoolSettled {
        pool_id,
        winner,
        payout: split.payout,
        retained: split.retained,
    });

    Ok(())
}
