//! Program-wide constants.

/// Seed prefix for the per-record escrow PDA:
/// `find_program_address([ESCROW_SEED, vesting_record_key], program_id)`.
pub const ESCROW_SEED: &[u8] = b"escrow";
