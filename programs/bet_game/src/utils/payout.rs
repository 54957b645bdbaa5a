use anchor_lang::prelude::*;

use crate::constants::{PERCENT_SCALE, PLAYERS_PER_POOL};
use crate::errors::BetGameError;

/// How a full pool's escrow is divided at settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PotSplit {
    /// Both stakes combined.
    pub total: u64,
    /// Paid to the winner.
    pub payout: u64,
    /// Kept by the registry as house fee.
    pub retained: u64,
}

/// Splits the pot of a full pool: `payout = 2 * stake * multiplier / 100`,
/// truncated. The remainder is retained so `payout + retained == total`.
pub fn split_pot(stake_amount: u64, reward_multiplier: u8) -> Result<PotSplit> {
    let total = stake_amount
        .checked_mul(PLAYERS_PER_POOL as u64)
        .ok_or(BetGameError::MathOverflow)?;

    let payout = (total as u128)
        .checked_mul(reward_multiplier as u128)
        .ok_or(BetGameError::MathOverflow)?
        .checked_div(PERCENT_SCALE as u128)
        .ok_or(BetGameError::MathOverflow)?;
    let payout = u64::try_from(payout).map_err(|_| BetGameError::MathOverflow)?;

    let retained = total
        .checked_sub(payout)
        .ok_or(BetGameError::MathOverflow)?;

    Ok(PotSplit {
        total,
        payout,
        retained,
    })
}
