use anchor_lang::prelude::*;

use crate::errors::BetGameError;
use crate::events::StakeUpdated;
use crate::state::{Pool, Registry};

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct UpdateStake<'info> {
    #[account(
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

    pub admin: Signer<'info>,
}

pub fn handler(ctx: Context<UpdateStake>, pool_id: u64, stake_amount: u64) -> Result<()> {
    let registry = &ctx.accounts.registry;
    let cap = registry.authorize(&ctx.accounts.admin.key())?;

    let old_stake_amount = registry.update_stake(&cap, &mut ctx.accounts.pool, stake_amount)?;

    emit!(StakeUpdated {
        pool_id,
        old_stake_amount,
        new_stake_amount: stake_amount,
    });

    Ok(())
}
