use anchor_lang::prelude::*;

use crate::state::PoolState;

#[event]
pub struct RegistryInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub reward_multiplier: u8,
}

#[event]
pub struct PoolCreated {
    pub pool_id: u64,
    pub stake_amount: u64,
}

#[event]
pub struct StakeUpdated {
    pub pool_id: u64,
    pub old_stake_amount: u64,
    pub new_stake_amount: u64,
}

#[event]
pub struct PlayerJoined {
    pub pool_id: u64,
    pub player: Pubkey,
    pub amount: u64,
    pub state: PoolState,
}

#[event]
pub struct PoolFilled {
    pub pool_id: u64,
    pub player_one: Pubkey,
    pub player_two: Pubkey,
}

#[event]
pub struct PoolSettled {
    pub pool_id: u64,
    pub winner: Pubkey,
    pub payout: u64,
    pub retained: u64,
}

#[event]
pub struct FeesWithdrawn {
    pub recipient: Pubkey,
    pub amount: u64,
    pub remaining: u64,
}
