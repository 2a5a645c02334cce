pub mod staking_account;

pub use staking_account::*;
