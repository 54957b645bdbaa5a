use anchor_lang::prelude::*;

use crate::errors::BetGameError;
use crate::state::{Pool, Registry};

/// Read-only access to the registry for the view instructions.
#[derive(Accounts)]
pub struct ReadRegistry<'info> {
    #[account(
        seeds = [Registry::SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct ReadPool<'info> {
    #[account(
        seeds = [Registry::SEED],
        bump = registry.bump,
        constraint = pool_id < registry.pool_count @ BetGameError::PoolNotFound,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        seeds = [Pool::SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}

pub fn read_pool_count(ctx: Context<ReadRegistry>) -> Result<u64> {
    Ok(ctx.accounts.registry.pool_count)
}

pub fn read_pool(ctx: Context<ReadPool>) -> Result<Pool> {
    let pool = &ctx.accounts.pool;
    ctx.accounts.registry.ensure_registered(pool)?;
    Ok((**pool).clone())
}

pub fn read_players(ctx: Context<ReadPool>) -> Result<Vec<Pubkey>> {
    let pool = &ctx.accounts.pool;
    ctx.accounts.registry.ensure_registered(pool)?;
    Ok(pool.players().to_vec())
}
