use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar;
use anchor_lang::{Discriminator, InstructionData};

use crate::pda::PoolAddresses;

/// Create a v3 staking pool
///
/// # Arguments
/// * `vault_bump` - Bump of the token vault PDA
/// * `staking_bump` - Bump of the v3 staking account PDA
/// * `pool_handle` - Trimmed pool handle, also a seed of both PDAs
/// * `reward_rate` - APR in basis points
/// * `lock_time` - Lock duration in seconds
/// * `vesting_interval` - Vesting step in seconds
///
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct InitializeArgs {
    pub vault_bump: u8,
    pub staking_bump: u8,
    pub pool_handle: String,
    pub reward_rate: u64,
    pub lock_time: u64,
    pub vesting_interval: u64,
}

impl Discriminator for InitializeArgs {
    // sha256("global:initialize")[..8]
    const DISCRIMINATOR: &'static [u8] = &[175, 175, 109, 31, 13, 152, 155, 237];
}

impl InstructionData for InitializeArgs {}

/// # Accounts
/// * `token_mint` - Staking token mint
/// * `token_vault` - Token vault PDA, created by the program
/// * `staking_account_v3` - Pool state PDA, created by the program
/// * `initializer` - Pool admin (signer, payer)
///
#[derive(Clone, Debug)]
pub struct Initialize {
    pub token_mint: Pubkey,
    pub token_vault: Pubkey,
    pub staking_account_v3: Pubkey,
    pub initializer: Pubkey,
    pub system_program: Pubkey,
    pub token_program: Pubkey,
    pub rent: Pubkey,
}

impl Initialize {
    pub fn new(pool: &PoolAddresses, initializer: Pubkey) -> Self {
        Self {
            token_mint: pool.mint,
            token_vault: pool.vault,
            staking_account_v3: pool.staking_v3,
            initializer,
            system_program: anchor_lang::system_program::ID,
            token_program: anchor_spl::token::ID,
            rent: sysvar::rent::ID,
        }
    }
}

impl ToAccountMetas for Initialize {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.token_mint, false),
            AccountMeta::new(self.token_vault, false),
            AccountMeta::new(self.staking_account_v3, false),
            AccountMeta::new(self.initializer, true),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.rent, false),
        ]
    }
}

impl InitializeArgs {
    pub fn new(
        pool: &PoolAddresses,
        reward_rate: u64,
        lock_time: u64,
        vesting_interval: u64,
    ) -> Self {
        Self {
            vault_bump: pool.vault_bump,
            staking_bump: pool.staking_v3_bump,
            pool_handle: pool.handle.clone(),
            reward_rate,
            lock_time,
            vesting_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::{build_instruction, test_utils::sighash};
    use crate::program_id;

    fn pool() -> PoolAddresses {
        PoolAddresses::derive(&program_id(false), &Pubkey::new_unique(), "gold").unwrap()
    }

    #[test]
    fn test_discriminator() {
        assert_eq!(InitializeArgs::DISCRIMINATOR, sighash("initialize").as_slice());
    }

    #[test]
    fn test_instruction_data_layout() {
        let pool = pool();
        let args = InitializeArgs::new(&pool, 3000, 10_368_000, 86_400);
        let data = args.data();

        assert_eq!(&data[..8], InitializeArgs::DISCRIMINATOR);
        assert_eq!(data[8], pool.vault_bump);
        assert_eq!(data[9], pool.staking_v3_bump);
        // Borsh string: u32 length prefix then bytes
        assert_eq!(&data[10..14], &4u32.to_le_bytes());
        assert_eq!(&data[14..18], b"gold");
        assert_eq!(&data[18..26], &3000u64.to_le_bytes());
        assert_eq!(&data[26..34], &10_368_000u64.to_le_bytes());
        assert_eq!(&data[34..42], &86_400u64.to_le_bytes());
        assert_eq!(data.len(), 42);

        assert_eq!(InitializeArgs::try_from_slice(&data[8..]).unwrap(), args);
    }

    #[test]
    fn test_account_metas() {
        let pool = pool();
        let admin = Pubkey::new_unique();
        let ix = build_instruction(
            pool.program_id,
            &Initialize::new(&pool, admin),
            &InitializeArgs::new(&pool, 0, 0, 0),
        );

        assert_eq!(ix.program_id, program_id(false));
        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert_eq!(
            keys,
            vec![
                pool.mint,
                pool.vault,
                pool.staking_v3,
                admin,
                anchor_lang::system_program::ID,
                anchor_spl::token::ID,
                sysvar::rent::ID,
            ]
        );

        let signers: Vec<bool> = ix.accounts.iter().map(|m| m.is_signer).collect();
        assert_eq!(signers, vec![false, false, false, true, false, false, false]);
        let writable: Vec<bool> = ix.accounts.iter().map(|m| m.is_writable).collect();
        assert_eq!(writable, vec![false, true, true, true, false, false, false]);
    }
}
