//! Periodic vesting schedule math.
//!
//! Vesting is strictly linear per whole elapsed period; there is no
//! sub-period pro-rating. `claimed_amount` is the only claim state:
//! every successful claim advances it to the vested total, so a second
//! claim before the next period boundary computes zero and is rejected.

use crate::error::VestingError;
use crate::state::VestingRecord;

/// Validate the schedule parameters of a new vesting record.
/// Check order is fixed; the first failing check wins.
pub fn validate_schedule(
    amount: u64,
    start_time: u64,
    end_time: u64,
    periods: u64,
    period_duration: u64,
    amount_per_period: u64,
    now: u64,
) -> Result<(), VestingError> {
    if amount == 0 {
        return Err(VestingError::InvalidAmount);
    }
    // start_time == now is accepted; only the past is rejected.
    if start_time < now {
        return Err(VestingError::InvalidStartTimestamp);
    }
    if end_time <= start_time {
        return Err(VestingError::InvalidEndTimestamp);
    }
    if periods == 0 || period_duration == 0 {
        return Err(VestingError::InvalidPeriodsConfiguration);
    }
    // Overflow counts as a bad configuration, never as wraparound.
    let total = amount_per_period
        .checked_mul(periods)
        .ok_or(VestingError::InvalidPeriodsConfiguration)?;
    if total != amount {
        return Err(VestingError::InvalidPeriodsConfiguration);
    }
    Ok(())
}

/// Lamports claimable from `record` at `now`.
///
/// Fails with `InvalidStartTimestamp` before the schedule starts and with
/// `InvalidAmount` when no full period has newly elapsed. Claimable periods
/// are capped at `record.periods`, so a record never pays out more than
/// `record.amount` no matter how much time passes.
pub fn claimable_amount(record: &VestingRecord, now: u64) -> Result<u64, VestingError> {
    if now < record.start_time {
        return Err(VestingError::InvalidStartTimestamp);
    }
    let elapsed = now - record.start_time;
    let periods_passed = elapsed
        .checked_div(record.period_duration)
        .ok_or(VestingError::InvalidPeriodsConfiguration)?;
    let claimable_periods = periods_passed.min(record.periods);
    let total_vested = claimable_periods
        .checked_mul(record.amount_per_period)
        .ok_or(VestingError::MathOverflow)?;
    let claimable = total_vested.saturating_sub(record.claimed_amount);
    if claimable == 0 {
        return Err(VestingError::InvalidAmount);
    }
    Ok(claimable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    const START: u64 = 1_700_000_000;

    fn record(
        amount: u64,
        periods: u64,
        period_duration: u64,
        amount_per_period: u64,
    ) -> VestingRecord {
        VestingRecord {
            owner: Pubkey::new_unique(),
            amount,
            start_time: START,
            end_time: START + periods * period_duration,
            periods,
            period_duration,
            amount_per_period,
            escrow: Pubkey::new_unique(),
            escrow_bump: 254,
            claimed_amount: 0,
        }
    }

    #[test]
    fn linear_schedule() {
        let r = record(10_000_000, 10, 1000, 1_000_000);
        // 2500s elapsed => 2 whole periods.
        assert_eq!(claimable_amount(&r, START + 2500).unwrap(), 2_000_000);
    }

    #[test]
    fn period_boundary_inclusive() {
        let r = record(10_000_000, 10, 1000, 1_000_000);
        assert!(matches!(
            claimable_amount(&r, START + 999),
            Err(VestingError::InvalidAmount)
        ));
        assert_eq!(claimable_amount(&r, START + 1000).unwrap(), 1_000_000);
    }

    #[test]
    fn nothing_vested_at_start() {
        let r = record(10_000_000, 10, 1000, 1_000_000);
        assert!(matches!(
            claimable_amount(&r, START),
            Err(VestingError::InvalidAmount)
        ));
    }

    #[test]
    fn claim_before_start_rejected() {
        let r = record(10_000_000, 10, 1000, 1_000_000);
        assert!(matches!(
            claimable_amount(&r, START - 1),
            Err(VestingError::InvalidStartTimestamp)
        ));
    }

    #[test]
    fn no_double_pay_within_period() {
        let mut r = record(10_000_000, 10, 1000, 1_000_000);
        let now = START + 2500;
        let first = claimable_amount(&r, now).unwrap();
        r.claimed_amount += first;
        // Same period boundary: second claim has nothing to pay.
        assert!(matches!(
            claimable_amount(&r, now),
            Err(VestingError::InvalidAmount)
        ));
        assert_eq!(r.claimed_amount, 2_000_000);
    }

    #[test]
    fn capped_at_full_schedule() {
        let mut r = record(10_000_000, 10, 1000, 1_000_000);
        r.claimed_amount = 3_000_000;
        // Far past the last boundary: pays the remainder, never more.
        assert_eq!(claimable_amount(&r, START + 1_000_000).unwrap(), 7_000_000);
    }

    #[test]
    fn fully_claimed_is_terminal() {
        let mut r = record(10_000_000, 10, 1000, 1_000_000);
        r.claimed_amount = r.amount;
        assert!(matches!(
            claimable_amount(&r, START + 10_000),
            Err(VestingError::InvalidAmount)
        ));
        assert!(matches!(
            claimable_amount(&r, u64::MAX),
            Err(VestingError::InvalidAmount)
        ));
    }

    #[test]
    fn claimed_never_exceeds_amount() {
        let mut r = record(10_000_000, 10, 1000, 1_000_000);
        // Claim at every boundary plus far beyond the end.
        for now in [
            START + 1000,
            START + 2500,
            START + 7001,
            START + 10_000,
            START + 500_000,
        ] {
            if let Ok(c) = claimable_amount(&r, now) {
                r.claimed_amount += c;
                assert!(r.claimed_amount <= r.amount);
            }
        }
        assert_eq!(r.claimed_amount, r.amount);
    }

    #[test]
    fn single_period_record() {
        let mut r = record(50_000_000, 1, 10_000, 50_000_000);
        assert!(matches!(
            claimable_amount(&r, START + 9_999),
            Err(VestingError::InvalidAmount)
        ));
        let c = claimable_amount(&r, START + 10_000).unwrap();
        assert_eq!(c, 50_000_000);
        r.claimed_amount += c;
        assert!(matches!(
            claimable_amount(&r, START + 20_000),
            Err(VestingError::InvalidAmount)
        ));
    }

    #[test]
    fn create_validation_table() {
        let now = START;
        assert!(
            validate_schedule(10_000_000, START + 60, START + 10_060, 10, 1000, 1_000_000, now)
                .is_ok()
        );

        // start_time == now is accepted.
        assert!(validate_schedule(10_000_000, now, now + 10_000, 10, 1000, 1_000_000, now).is_ok());

        assert!(matches!(
            validate_schedule(0, START + 60, START + 10_060, 10, 1000, 0, now),
            Err(VestingError::InvalidAmount)
        ));
        assert!(matches!(
            validate_schedule(10_000_000, START - 100, START + 10_000, 10, 1000, 1_000_000, now),
            Err(VestingError::InvalidStartTimestamp)
        ));
        assert!(matches!(
            validate_schedule(10_000_000, START + 1000, START + 500, 10, 1000, 1_000_000, now),
            Err(VestingError::InvalidEndTimestamp)
        ));
        assert!(matches!(
            validate_schedule(10_000_000, START + 1000, START + 1000, 10, 1000, 1_000_000, now),
            Err(VestingError::InvalidEndTimestamp)
        ));
        assert!(matches!(
            validate_schedule(10_000_000, START + 60, START + 10_060, 0, 1000, 1_000_000, now),
            Err(VestingError::InvalidPeriodsConfiguration)
        ));
        assert!(matches!(
            validate_schedule(10_000_000, START + 60, START + 10_060, 10, 0, 1_000_000, now),
            Err(VestingError::InvalidPeriodsConfiguration)
        ));
        // 10 * 50_000 != 1_000_000.
        assert!(matches!(
            validate_schedule(1_000_000, START + 60, START + 10_060, 10, 100, 50_000, now),
            Err(VestingError::InvalidPeriodsConfiguration)
        ));
    }

    #[test]
    fn period_product_overflow_is_invalid_config() {
        let now = START;
        assert!(matches!(
            validate_schedule(u64::MAX, START + 60, START + 10_060, 3, 1000, u64::MAX / 2, now),
            Err(VestingError::InvalidPeriodsConfiguration)
        ));
    }
}
