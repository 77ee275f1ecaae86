use anchor_lang::prelude::*;

/// Custom error codes for the vesting escrow program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Invalid start timestamp")]
    InvalidStartTimestamp,

    #[msg("Invalid end timestamp")]
    InvalidEndTimestamp,

    #[msg("Invalid periods configuration")]
    InvalidPeriodsConfiguration,

    #[msg("Insufficient balance to cover the creation fee")]
    InsufficientBalance,

    #[msg("Zero address")]
    ZeroAddress,

    #[msg("Treasury does not match the vesting configuration")]
    InvalidTreasury,

    #[msg("Escrow account does not match the vesting record")]
    InvalidEscrow,

    #[msg("Math overflow")]
    MathOverflow,
}
