use anchor_lang::prelude::*;

use crate::constants::PLAYERS_PER_POOL;
use crate::errors::BetGameError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum PoolState {
    /// No players, stake can still be changed.
    Empty,
    /// One stake escrowed, waiting for an opponent.
    OneJoined,
    /// Both stakes escrowed, ready for settlement.
    Full,
}

impl PoolState {
    pub fn from_player_count(count: usize) -> Self {
        match count {
            0 => PoolState::Empty,
            1 => PoolState::OneJoined,
            _ => PoolState::Full,
        }
    }
}

/// A single betting round. Reset, not closed, after settlement.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Pool {
    /// Sequential id handed out by the registry.
    pub pool_id: u64,
    /// Deposit each player pays to join.
    pub stake_amount: u64,
    /// Derived from `player_count` on every change.
    pub state: PoolState,
    /// Seats in join order. Unoccupied seats hold the default key.
    pub players: [Pubkey; PLAYERS_PER_POOL],
    /// Number of occupied seats.
    pub player_count: u8,
    /// PDA bump seed.
    pub bump: u8,
}

impl Pool {
    pub const SEED: &'static [u8] = b"pool";

    pub fn new(pool_id: u64, stake_amount: u64, bump: u8) -> Self {
        Self {
            pool_id,
            stake_amount,
            state: PoolState::Empty,
            players: [Pubkey::default(); PLAYERS_PER_POOL],
            player_count: 0,
            bump,
        }
    }

    pub fn players(&self) -> &[Pubkey] {
        &self.players[..self.player_count as usize]
    }

    pub fn has_player(&self, key: &Pubkey) -> bool {
        self.players().contains(key)
    }

    /// Escrow currently held for this pool.
    pub fn escrowed(&self) -> Result<u64> {
        self.stake_amount
            .checked_mul(self.player_count as u64)
            .ok_or_else(|| error!(BetGameError::MathOverflow))
    }

    pub fn set_stake(&mut self, stake_amount: u64) -> Result<u64> {
        require!(self.state == PoolState::Empty, BetGameError::PoolNotEmpty);
        require!(stake_amount > 0, BetGameError::InvalidStake);

        let old = self.stake_amount;
        self.stake_amount = stake_amount;
        Ok(old)
    }

    pub fn ensure_joinable(&self, player: &Pubkey) -> Result<()> {
        require!(self.state != PoolState::Full, BetGameError::PoolFull);
        require!(!self.has_player(player), BetGameError::AlreadyJoined);
        Ok(())
    }

    /// Puts `player` in the next free seat and returns the new state.
    pub fn seat(&mut self, player: Pubkey) -> Result<PoolState> {
        self.ensure_joinable(&player)?;

        let slot = self
            .players
            .get_mut(self.player_count as usize)
            .ok_or_else(|| error!(BetGameError::PoolFull))?;
        *slot = player;
        self.player_count += 1;
        self.state = PoolState::from_player_count(self.player_count as usize);

        Ok(self.state)
    }

    pub fn ensure_settleable(&self, winner: &Pubkey) -> Result<()> {
        require!(self.state == PoolState::Full, BetGameError::PoolNotSettleable);
        require!(self.has_player(winner), BetGameError::WinnerNotParticipant);
        Ok(())
    }

    /// Clears the seats for the next round. Stake is kept.
    pub fn reset(&mut self) {
        self.players = [Pubkey::default(); PLAYERS_PER_POOL];
        self.player_count = 0;
        self.state = PoolState::Empty;
    }
}
