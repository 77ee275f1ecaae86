use anchor_lang::prelude::*;

/// Per-administrator vesting configuration.
///
/// Governs record creation: every `create_vesting` against this config pays
/// `creation_fee` lamports to `treasury`. Mutated in place by the admin
/// instructions; never closed.
#[account]
pub struct VestingConfig {
    /// Authority for fee, treasury and ownership updates.
    pub owner: Pubkey,
    /// Wallet receiving creation fees.
    pub treasury: Pubkey,
    /// Lamports charged per record creation. Always > 0.
    pub creation_fee: u64,
}

impl VestingConfig {
    pub const SIZE: usize =
        32 + // owner
        32 + // treasury
        8;   // creation_fee
}
