use anchor_lang::prelude::*;

use crate::constants::DISCRIMINATOR_SIZE;
use crate::errors::BetGameError;
use crate::events::PoolCreated;
use crate::state::{Pool, Registry};

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(
        mut,
        seeds = [Registry::SEED],
        bump = registry.bump,
        has_one = admin @ BetGameError::Unauthorized,
    )]
    pub registry: Account<'info, Registry>,

    /// Next pool in sequence; its id is the current pool count.
    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR_SIZE + Pool::INIT_SPACE,
        seeds = [Pool::SEED, registry.pool_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub pool: Account<'info, Pool>,

    /// Pays rent for the pool account.
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreatePool>, stake_amount: u64) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    let cap = registry.authorize(&ctx.accounts.admin.key())?;

    let pool = registry.create_pool(&cap, stake_amount, ctx.bumps.pool)?;
    let pool_id = pool.pool_id;
    ctx.accounts.pool.set_inner(pool);

    msg!("Pool {} created with stake {}", pool_id, stake_amount);

    emit!(PoolCreated {
        pool_id,
        stake_amount,
    });

    Ok(())
}
