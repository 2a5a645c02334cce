// =============================================================================
// Chicks Locked Staking Constants
// =============================================================================

// PDA Seeds
pub const STAKING_PDA_SEED_V2: &[u8] = b"staking_v2";
pub const STAKING_PDA_SEED_V3: &[u8] = b"staking_v3";
pub const USER_STAKING_PDA_SEED_V3: &[u8] = b"user_staking_v3";

// Default staking token (CHICKS)
pub const CHICKS_TOKEN_ADDRESS: &str = "cxxShYRVcepDudXhe7U62QHvw8uBJoKFifmzggGKVC2";
pub const CHICKS_DECIMALS: u8 = 9;

// A pool handle is used verbatim as a seed, so it shares the seed length limit
pub const MAX_HANDLE_LEN: usize = 32;

// Reward rate is stored in basis points: 30 (% APR) -> 3000
pub const BASIS_POINTS_PER_PERCENT: f64 = 100.0;

// Lock values below this are days, anything at or above is already seconds
pub const LOCK_DAYS_THRESHOLD: u64 = 10_000;
pub const SECONDS_PER_DAY: u64 = 86_400;

// Largest decimals value for which 10^decimals fits in a u64
pub const MAX_DECIMALS: u8 = 19;
