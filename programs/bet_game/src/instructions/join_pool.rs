use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::BetGameError;
use crate::events::{PlayerJoined, PoolFilled};
use crate::ledger::SplLedger;
use crate::state::{Pool, PoolState, Registry};

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct JoinPool<'info> {
    #[account(
        mut,
        seeds = [Registry::SEED],
        bump = registry.bump,
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

    /// Player's token account. The registry must be approved as delegate for
    /// at least the pool stake.
    #[account(
        mut,
        constraint = player_token_account.owner == player.key() @ BetGameError::InvalidTokenAccount,
        constraint = player_token_account.mint == registry.mint @ BetGameError::InvalidTokenAccount,
    )]
    pub player_token_account: Account<'info, TokenAccount>,

    pub player: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<JoinPool>, pool_id: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    let bump_bytes = [ctx.accounts.registry.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[Registry::SEED, &bump_bytes]];

    let mut ledger = SplLedger::new(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        ctx.accounts.registry.to_account_info(),
        &ctx.accounts.player_token_account,
        signer_seeds,
    );

    let pool = &mut ctx.accounts.pool;
    let state = ctx.accounts.registry.join(pool, player, &mut ledger)?;

    emit!(PlayerJoined {
        pool_id,
        player,
        amount: pool.stake_amount,
        state,
    });

    if state == PoolState::Full {
        msg!("Pool {} is full", pool_id);
        emit!(PoolFilled {
            pool_id,
            player_one: pool.players[0],
            player_two: pool.players[1],
        });
    }

    Ok(())
}
