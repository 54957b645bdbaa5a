pub mod create_pool;
pub mod initialize;
pub mod join_pool;
pub mod settle_pool;
pub mod update_stake;
pub mod views;
pub mod withdraw_fees;

pub use create_pool::*;
pub use initialize::*;
pub use join_pool::*;
pub use settle_pool::*;
pub use update_stake::*;
pub use views::*;
pub use withdraw_fees::*;
