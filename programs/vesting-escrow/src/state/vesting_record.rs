use anchor_lang::prelude::*;

/// One vesting schedule and its claim progress.
///
/// The schedule fields are immutable after creation; only `claimed_amount`
/// moves, and only through `claim`. Fully-claimed records are kept as
/// history.
#[account]
pub struct VestingRecord {
    /// Wallet entitled to claim.
    pub owner: Pubkey,
    /// Total lamports locked. Equals `amount_per_period * periods` exactly.
    pub amount: u64,
    /// Schedule start (Unix seconds). Never in the past at creation.
    pub start_time: u64,
    /// Schedule end (Unix seconds). Strictly after `start_time`.
    pub end_time: u64,
    /// Number of unlock events. Always > 0.
    pub periods: u64,
    /// Seconds per unlock period. Always > 0.
    pub period_duration: u64,
    /// Lamports unlocked per elapsed whole period.
    pub amount_per_period: u64,
    /// Escrow PDA holding the locked lamports, bound to this record for its
    /// entire lifetime. Re-derived and verified on every claim.
    pub escrow: Pubkey,
    /// Canonical bump of the escrow PDA.
    pub escrow_bump: u8,
    /// Lamports already paid out. Monotone, <= `amount`.
    pub claimed_amount: u64,
}

impl VestingRecord {
    pub const SIZE: usize =
        32 + // owner
        8 +  // amount
        8 +  // start_time
        8 +  // end_time
        8 +  // periods
        8 +  // period_duration
        8 +  // amount_per_period
        32 + // escrow
        1 +  // escrow_bump
        8;   // claimed_amount
}
