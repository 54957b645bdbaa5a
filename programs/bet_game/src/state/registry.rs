use anchor_lang::prelude::*;

use crate::constants::{MAX_REWARD_MULTIPLIER, MIN_REWARD_MULTIPLIER};
use crate::errors::BetGameError;
use crate::ledger::TokenLedger;
use crate::state::{Pool, PoolState};
use crate::utils::{split_pot, PotSplit};

/// Proof that the caller is the registry admin. Only `Registry::authorize`
/// hands these out.
#[derive(Debug)]
pub struct AdminCap {
    _sealed: (),
}

#[account]
#[derive(InitSpace)]
pub struct Registry {
    /// Fixed at initialization; gates pool creation, stake updates and settlement.
    pub admin: Pubkey,
    /// Token escrowed by every pool.
    pub mint: Pubkey,
    /// Registry-owned token account holding escrow and retained fees.
    pub vault: Pubkey,
    /// Percentage of the pot paid to the winner.
    pub reward_multiplier: u8,
    /// Pools created so far. The next pool gets this id.
    pub pool_count: u64,
    /// Stake currently held for seated players across all pools.
    pub escrowed: u64,
    /// Settlement residue not yet withdrawn by the admin.
    pub retained_fees: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Registry {
    pub const SEED: &'static [u8] = b"registry";

    pub fn configure(
        &mut self,
        admin: Pubkey,
        mint: Pubkey,
        vault: Pubkey,
        reward_multiplier: u8,
        bump: u8,
    ) -> Result<()> {
        require!(
            (MIN_REWARD_MULTIPLIER..=MAX_REWARD_MULTIPLIER).contains(&reward_multiplier),
            BetGameError::InvalidRewardMultiplier
        );

        self.admin = admin;
        self.mint = mint;
        self.vault = vault;
        self.reward_multiplier = reward_multiplier;
        self.pool_count = 0;
        self.escrowed = 0;
        self.retained_fees = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn authorize(&self, caller: &Pubkey) -> Result<AdminCap> {
        require_keys_eq!(*caller, self.admin, BetGameError::Unauthorized);
        Ok(AdminCap { _sealed: () })
    }

    pub fn ensure_registered(&self, pool: &Pool) -> Result<()> {
        require!(pool.pool_id < self.pool_count, BetGameError::PoolNotFound);
        Ok(())
    }

    /// Hands out the next id and returns the empty pool to store under it.
    pub fn create_pool(&mut self, _cap: &AdminCap, stake_amount: u64, bump: u8) -> Result<Pool> {
        require!(stake_amount > 0, BetGameError::InvalidStake);

        let pool_id = self.pool_count;
        self.pool_count = pool_id
            .checked_add(1)
            .ok_or(BetGameError::MathOverflow)?;
        Ok(Pool::new(pool_id, stake_amount, bump))
    }

    /// Returns the previous stake.
    pub fn update_stake(
        &self,
        _cap: &AdminCap,
        pool: &mut Pool,
        stake_amount: u64,
    ) -> Result<u64> {
        self.ensure_registered(pool)?;
        pool.set_stake(stake_amount)
    }

    /// Seats `player` after pulling the stake through `ledger`. Nothing is
    /// written unless the pull succeeds.
    pub fn join<L: TokenLedger>(
        &mut self,
        pool: &mut Pool,
        player: Pubkey,
        ledger: &mut L,
    ) -> Result<PoolState> {
        self.ensure_registered(pool)?;
        pool.ensure_joinable(&player)?;

        let stake = pool.stake_amount;
        let escrowed = self
            .escrowed
            .checked_add(stake)
            .ok_or(BetGameError::MathOverflow)?;

        ledger.pull(&player, stake)?;

        self.escrowed = escrowed;
        pool.seat(player)
    }

    /// Pays the winner of a full pool and resets it for the next round.
    pub fn settle<L: TokenLedger>(
        &mut self,
        _cap: &AdminCap,
        pool: &mut Pool,
        winner: Pubkey,
        ledger: &mut L,
    ) -> Result<PotSplit> {
        self.ensure_registered(pool)?;
        pool.ensure_settleable(&winner)?;

        let split = split_pot(pool.stake_amount, self.reward_multiplier)?;
        let escrowed = self
            .escrowed
            .checked_sub(split.total)
            .ok_or(BetGameError::MathOverflow)?;
        let retained_fees = self
            .retained_fees
            .checked_add(split.retained)
            .ok_or(BetGameError::MathOverflow)?;

        if split.payout > 0 {
            ledger.push(&winner, split.payout)?;
        }

        self.escrowed = escrowed;
        self.retained_fees = retained_fees;
        pool.reset();

        Ok(split)
    }

    /// Sends retained fees to the admin. Returns what is left.
    pub fn withdraw_fees<L: TokenLedger>(
        &mut self,
        _cap: &AdminCap,
        amount: u64,
        ledger: &mut L,
    ) -> Result<u64> {
        let remaining = self
            .retained_fees
            .checked_sub(amount)
            .ok_or(BetGameError::InsufficientRetainedFees)?;

        let admin = self.admin;
        ledger.push(&admin, amount)?;

        self.retained_fees = remaining;
        Ok(remaining)
    }
}
