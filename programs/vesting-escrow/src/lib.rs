pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod vesting_escrow {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, creation_fee: u64) -> Result<()> {
        instructions::initialize::initialize(ctx, creation_fee)
    }

    pub fn create_vesting(
        ctx: Context<CreateVesting>,
        amount: u64,
        start_time: u64,
        end_time: u64,
        periods: u64,
        period_duration: u64,
        amount_per_period: u64,
    ) -> Result<()> {
        instructions::create_vesting::create_vesting(
            ctx,
            amount,
            start_time,
            end_time,
            periods,
            period_duration,
            amount_per_period,
        )
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    pub fn update_creation_fee(ctx: Context<UpdateCreationFee>, new_fee: u64) -> Result<()> {
        instructions::update_creation_fee::update_creation_fee(ctx, new_fee)
    }

    pub fn update_treasury(ctx: Context<UpdateTreasury>, new_treasury: Pubkey) -> Result<()> {
        instructions::update_treasury::update_treasury(ctx, new_treasury)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::transfer_ownership(ctx, new_owner)
    }
}
