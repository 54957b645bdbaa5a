use anchor_lang::prelude::*;

#[error_code]
pub enum BetGameError {
    #[msg("Only the registry admin can perform this action.")]
    Unauthorized,
    #[msg("No pool exists with this id.")]
    PoolNotFound,
    #[msg("Stake amount must be greater than zero.")]
    InvalidStake,
    #[msg("Stake can only change while the pool has no players.")]
    PoolNotEmpty,
    #[msg("Pool already has two players.")]
    PoolFull,
    #[msg("Player has already joined this pool.")]
    AlreadyJoined,
    #[msg("Pool must be full before it can be settled.")]
    PoolNotSettleable,
    #[msg("Winner is not a player in this pool.")]
    WinnerNotParticipant,
    #[msg("Token balance is too low for this transfer.")]
    InsufficientBalance,
    #[msg("Registry is not approved to pull this amount.")]
    InsufficientAllowance,
    #[msg("Reward multiplier must be between 1 and 100 percent.")]
    InvalidRewardMultiplier,
    #[msg("Token account does not match the expected owner or mint.")]
    InvalidTokenAccount,
    #[msg("Withdrawal exceeds the retained fee balance.")]
    InsufficientRetainedFees,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
