use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingConfig;

pub fn update_creation_fee(ctx: Context<UpdateCreationFee>, new_fee: u64) -> Result<()> {
    // The fee stays strictly positive for the config's whole lifetime.
    require!(new_fee > 0, VestingError::InvalidAmount);

    let config = &mut ctx.accounts.config;
    let old_fee = config.creation_fee;
    config.creation_fee = new_fee;

    emit!(CreationFeeUpdated {
        config: config.key(),
        old_fee,
        new_fee,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateCreationFee<'info> {
    #[account(
        mut,
        constraint = config.owner == owner.key() @ VestingError::UnauthorizedOwner
    )]
    pub config: Account<'info, VestingConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct CreationFeeUpdated {
    pub config: Pubkey,
    pub old_fee: u64,
    pub new_fee: u64,
}
