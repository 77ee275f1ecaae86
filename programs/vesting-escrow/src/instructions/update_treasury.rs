use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingConfig;

pub fn update_treasury(ctx: Context<UpdateTreasury>, new_treasury: Pubkey) -> Result<()> {
    require!(new_treasury != Pubkey::default(), VestingError::ZeroAddress);

    let config = &mut ctx.accounts.config;
    let old_treasury = config.treasury;
    config.treasury = new_treasury;

    emit!(TreasuryUpdated {
        config: config.key(),
        old_treasury,
        new_treasury,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateTreasury<'info> {
    #[account(
        mut,
        constraint = config.owner == owner.key() @ VestingError::UnauthorizedOwner
    )]
    pub config: Account<'info, VestingConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct TreasuryUpdated {
    pub config: Pubkey,
    pub old_treasury: Pubkey,
    pub new_treasury: Pubkey,
}
