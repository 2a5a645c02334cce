// =============================================================================
// Instructions Module - Chicks Locked Staking (client side)
// =============================================================================
// Each instruction has an argument struct (Anchor discriminator + Borsh body)
// and an accounts struct that expands to AccountMetas in program order.

pub mod deposit_reward;
pub mod initialize;
pub mod migrate_v3;

pub use deposit_reward::*;
pub use initialize::*;
pub use migrate_v3::*;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::InstructionData;

/// Assemble a program instruction from its accounts and arguments
pub fn build_instruction(
    program_id: Pubkey,
    accounts: &impl ToAccountMetas,
    args: &impl InstructionData,
) -> Instruction {
    Instruction {
        program_id,
        accounts: accounts.to_account_metas(None),
        data: args.data(),
    }
}
