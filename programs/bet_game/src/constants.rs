/// Denominator for the reward multiplier.
pub const PERCENT_SCALE: u64 = 100;

pub const MIN_REWARD_MULTIPLIER: u8 = 1;
pub const MAX_REWARD_MULTIPLIER: u8 = 100;

/// Every pool seats exactly this many players.
pub const PLAYERS_PER_POOL: usize = 2;

pub const DISCRIMINATOR_SIZE: usize = 8;
