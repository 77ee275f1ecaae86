use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingConfig;

pub fn initialize(ctx: Context<Initialize>, creation_fee: u64) -> Result<()> {
    require!(creation_fee > 0, VestingError::InvalidAmount);
    require!(
        ctx.accounts.treasury.key() != Pubkey::default(),
        VestingError::ZeroAddress
    );

    let config = &mut ctx.accounts.config;
    config.owner = ctx.accounts.owner.key();
    config.treasury = ctx.accounts.treasury.key();
    config.creation_fee = creation_fee;

    emit!(ConfigInitialized {
        config: config.key(),
        owner: config.owner,
        treasury: config.treasury,
        creation_fee,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(init, payer = owner, space = 8 + VestingConfig::SIZE)]
    pub config: Account<'info, VestingConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    /// Wallet that will receive creation fees for records under this config.
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ConfigInitialized {
    pub config: Pubkey,
    pub owner: Pubkey,
    pub treasury: Pubkey,
    pub creation_fee: u64,
}
