use thiserror::Error;

/// Failures raised while preparing an instruction, before anything reaches the cluster
#[derive(Debug, Error, PartialEq)]
pub enum StakingClientError {
    // Pool handle
    #[error("pool handle is empty")]
    EmptyHandle,

    #[error("pool handle is {0} bytes, at most 32 are allowed")]
    HandleTooLong(usize),

    // Arguments
    #[error("APR must be a finite, non-negative number, got {0}")]
    InvalidApr(f64),

    #[error("reward rate for APR {0} does not fit in u64")]
    RewardRateOverflow(f64),

    #[error("decimals must be at most 19, got {0}")]
    InvalidDecimals(u8),

    #[error("amount {amount} with {decimals} decimals overflows u64 base units")]
    AmountOverflow { amount: u64, decimals: u8 },

    // Derivation
    #[error("no viable bump seed for {0}")]
    NoViableBump(&'static str),
}
