use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingConfig;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    require!(new_owner != Pubkey::default(), VestingError::ZeroAddress);

    let config = &mut ctx.accounts.config;
    let old_owner = config.owner;
    config.owner = new_owner;

    emit!(OwnershipTransferred {
        config: config.key(),
        old_owner,
        new_owner,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        constraint = config.owner == owner.key() @ VestingError::UnauthorizedOwner
    )]
    pub config: Account<'info, VestingConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub config: Pubkey,
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
}
