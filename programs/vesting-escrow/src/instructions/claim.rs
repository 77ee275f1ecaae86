use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::ESCROW_SEED;
use crate::error::VestingError;
use crate::state::VestingRecord;
use crate::utils::schedule;

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp as u64;
    let claimable = schedule::claimable_amount(&ctx.accounts.vesting_record, now)?;

    let record_key = ctx.accounts.vesting_record.key();
    let escrow_bump = ctx.accounts.vesting_record.escrow_bump;
    let seeds = &[ESCROW_SEED, record_key.as_ref(), &[escrow_bump]];
    let signer_seeds = &[&seeds[..]];

    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.escrow.to_account_info(),
                to: ctx.accounts.owner.to_account_info(),
            },
            signer_seeds,
        ),
        claimable,
    )?;

    let record = &mut ctx.accounts.vesting_record;
    record.claimed_amount = record
        .claimed_amount
        .checked_add(claimable)
        .ok_or(VestingError::MathOverflow)?;

    emit!(TokensClaimed {
        record: record_key,
        owner: record.owner,
        amount: claimable,
        claimed_total: record.claimed_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        constraint = vesting_record.owner == owner.key() @ VestingError::UnauthorizedOwner
    )]
    pub vesting_record: Account<'info, VestingRecord>,

    /// The record's escrow PDA, re-derived from the record key and checked
    /// against the address stored at creation.
    #[account(
        mut,
        seeds = [ESCROW_SEED, vesting_record.key().as_ref()],
        bump = vesting_record.escrow_bump,
        constraint = escrow.key() == vesting_record.escrow @ VestingError::InvalidEscrow
    )]
    pub escrow: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensClaimed {
    pub record: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
}
