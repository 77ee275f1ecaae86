use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::ESCROW_SEED;
use crate::error::VestingError;
use crate::state::{VestingConfig, VestingRecord};
use crate::utils::schedule;

pub fn create_vesting(
    ctx: Context<CreateVesting>,
    amount: u64,
    start_time: u64,
    end_time: u64,
    periods: u64,
    period_duration: u64,
    amount_per_period: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp as u64;
    schedule::validate_schedule(
        amount,
        start_time,
        end_time,
        periods,
        period_duration,
        amount_per_period,
        now,
    )?;

    // The fee charged is the config's fee as of this call; later fee updates
    // do not affect existing records.
    let creation_fee = ctx.accounts.config.creation_fee;
    require!(
        ctx.accounts.owner.lamports() >= creation_fee,
        VestingError::InsufficientBalance
    );

    // Lock the full schedule amount in the record's escrow PDA.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner.to_account_info(),
                to: ctx.accounts.escrow.to_account_info(),
            },
        ),
        amount,
    )?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        creation_fee,
    )?;

    let record = &mut ctx.accounts.vesting_record;
    record.owner = ctx.accounts.owner.key();
    record.amount = amount;
    record.start_time = start_time;
    record.end_time = end_time;
    record.periods = periods;
    record.period_duration = period_duration;
    record.amount_per_period = amount_per_period;
    record.escrow = ctx.accounts.escrow.key();
    record.escrow_bump = ctx.bumps.escrow;
    record.claimed_amount = 0;

    emit!(VestingCreated {
        record: record.key(),
        owner: record.owner,
        escrow: record.escrow,
        amount,
        start_time,
        end_time,
        periods,
        period_duration,
        amount_per_period,
        creation_fee,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateVesting<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(init, payer = owner, space = 8 + VestingRecord::SIZE)]
    pub vesting_record: Account<'info, VestingRecord>,

    /// Escrow PDA bound to this record; holds the locked lamports. The
    /// caller supplies it, the seeds constraint re-derives and verifies it.
    #[account(
        mut,
        seeds = [ESCROW_SEED, vesting_record.key().as_ref()],
        bump
    )]
    pub escrow: SystemAccount<'info>,

    /// Configuration governing this creation (fee amount and destination).
    pub config: Account<'info, VestingConfig>,

    #[account(
        mut,
        constraint = treasury.key() == config.treasury @ VestingError::InvalidTreasury
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingCreated {
    pub record: Pubkey,
    pub owner: Pubkey,
    pub escrow: Pubkey,
    pub amount: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub periods: u64,
    pub period_duration: u64,
    pub amount_per_period: u64,
    pub creation_fee: u64,
}
