use anchor_lang::prelude::Pubkey;
use anyhow::Result;
use chicks_staking_locked::PoolAddresses;

use crate::config::Settings;

/// Print the program id and every PDA of a pool. Purely local.
pub fn show_addresses(settings: &Settings, handle: &str, staker: Option<&Pubkey>) -> Result<()> {
    let pool = PoolAddresses::derive(&settings.program_id(), &settings.token, handle)?;
    for line in render(&pool, staker)? {
        println!("{line}");
    }
    Ok(())
}

fn render(pool: &PoolAddresses, staker: Option<&Pubkey>) -> Result<Vec<String>> {
    let mut lines = vec![
        format!("Program:            {}", pool.program_id),
        format!("Token mint:         {}", pool.mint),
        format!("Pool handle:        {}", pool.handle),
        format!("Token vault:        {} (bump {})", pool.vault, pool.vault_bump),
        format!(
            "Staking account v3: {} (bump {})",
            pool.staking_v3, pool.staking_v3_bump
        ),
        format!(
            "Staking account v2: {} (bump {})",
            pool.staking_v2, pool.staking_v2_bump
        ),
    ];
    if let Some(staker) = staker {
        let (address, bump) = pool.user_staking_v3(staker)?;
        lines.push(format!("User staking v3:    {address} (bump {bump}) for {staker}"));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let program = chicks_staking_locked::program_id(true);
        let mint = Pubkey::new_unique();
        let pool = PoolAddresses::derive(&program, &mint, "gold").unwrap();

        let lines = render(&pool, None).unwrap();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].ends_with(&program.to_string()));
        assert!(lines[4].contains(&pool.staking_v3.to_string()));

        let staker = Pubkey::new_unique();
        let lines = render(&pool, Some(&staker)).unwrap();
        assert_eq!(lines.len(), 7);
        let (user, _) = pool.user_staking_v3(&staker).unwrap();
        assert!(lines[6].contains(&user.to_string()));
    }
}
