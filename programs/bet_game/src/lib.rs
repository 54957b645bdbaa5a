use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

#[cfg(test)]
mod testing;

use instructions::*;
use state::Pool;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod bet_game {
    use super::*;

    /// One-time setup. The signer becomes the permanent admin.
    pub fn initialize(ctx: Context<Initialize>, reward_multiplier: u8) -> Result<()> {
        instructions::initialize::handler(ctx, reward_multiplier)
    }

    /// Admin opens the next pool account with a fixed stake.
    pub fn create_pool(ctx: Context<CreatePool>, stake_amount: u64) -> Result<()> {
        instructions::create_pool::handler(ctx, stake_amount)
    }

    /// Admin changes the stake of a pool nobody has joined.
    pub fn update_stake(
        ctx: Context<UpdateStake>,
        pool_id: u64,
        stake_amount: u64,
    ) -> Result<()> {
        instructions::update_stake::handler(ctx, pool_id, stake_amount)
    }

    /// Player escrows the stake and takes a seat.
    pub fn join(ctx: Context<JoinPool>, pool_id: u64) -> Result<()> {
        instructions::join_pool::handler(ctx, pool_id)
    }

    /// Admin pays the winner of a full pool and resets it.
    pub fn settle(ctx: Context<SettlePool>, pool_id: u64, winner: Pubkey) -> Result<()> {
        instructions::settle_pool::handler(ctx, pool_id, winner)
    }

    /// Admin withdraws retained settlement fees.
    pub fn withdraw_fees(ctx: Context<WithdrawFees>, amount: u64) -> Result<()> {
        instructions::withdraw_fees::handler(ctx, amount)
    }

    pub fn pool_count(ctx: Context<ReadRegistry>) -> Result<u64> {
        instructions::views::read_pool_count(ctx)
    }

    pub fn get_pool(ctx: Context<ReadPool>, _pool_id: u64) -> Result<Pool> {
        instructions::views::read_pool(ctx)
    }

    pub fn get_players(ctx: Context<ReadPool>, _pool_id: u64) -> Result<Vec<Pubkey>> {
        instructions::views::read_players(ctx)
    }
}
