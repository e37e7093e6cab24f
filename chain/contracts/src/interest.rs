//! Simple (non-compounding) interest accrual
//!
//! The rate is fixed per deposit unit: a deposit of exactly `unit` wei earns
//! `per_second` wei of reward for every second in custody. Larger deposits
//! earn proportionally, truncated toward zero.
//!
//! ```text
//! reward = floor(principal * per_second * elapsed / unit)
//! ```
//!
//! `per_second` is floored once, when the rate is derived from the yearly
//! yield, and only then scaled by time. A minimum deposit therefore earns
//! exactly `per_second * elapsed`, which can sit a few wei below
//! `floor(unit * apy * elapsed / seconds_per_year)`.

use serde::{Deserialize, Serialize};
use types::units::Wei;

/// Per-second reward paid on one deposit unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualRate {
    /// Reward, in token wei, per second per `unit` of principal
    pub per_second: Wei,
    /// Principal the rate is quoted against (the minimum deposit)
    pub unit: Wei,
}

impl AccrualRate {
    pub fn new(per_second: Wei, unit: Wei) -> Self {
        Self { per_second, unit }
    }

    /// Reward owed for holding `principal` for `elapsed` seconds.
    ///
    /// Returns `None` on arithmetic overflow or a zero `unit`. The principal
    /// is split into whole units and a remainder so that the intermediate
    /// products stay small; the result is identical to evaluating the
    /// formula in unbounded integers.
    pub fn accrue(&self, principal: Wei, elapsed: u64) -> Option<Wei> {
        if self.unit == 0 {
            return None;
        }
        let per_unit = self.per_second.checked_mul(Wei::from(elapsed))?;

        let whole_units = principal / self.unit;
        let remainder = principal % self.unit;

        let whole = whole_units.checked_mul(per_unit)?;
        let partial = remainder.checked_mul(per_unit)? / self.unit;
        whole.checked_add(partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_DEPOSIT: Wei = 10_000_000_000_000_000;
    const PER_SECOND: Wei = 31_668_017;

    fn rate() -> AccrualRate {
        AccrualRate::new(PER_SECOND, MIN_DEPOSIT)
    }

    #[test]
    fn test_min_deposit_one_second() {
        assert_eq!(rate().accrue(MIN_DEPOSIT, 1), Some(PER_SECOND));
    }

    #[test]
    fn test_zero_elapsed() {
        assert_eq!(rate().accrue(MIN_DEPOSIT * 500, 0), Some(0));
    }

    #[test]
    fn test_linear_in_time() {
        assert_eq!(rate().accrue(MIN_DEPOSIT, 3_600), Some(PER_SECOND * 3_600));
    }

    #[test]
    fn test_linear_in_whole_units() {
        assert_eq!(rate().accrue(MIN_DEPOSIT * 10, 1), Some(PER_SECOND * 10));
        // 1 ether = 100 units
        assert_eq!(
            rate().accrue(1_000_000_000_000_000_000, 60),
            Some(PER_SECOND * 100 * 60)
        );
    }

    #[test]
    fn test_fractional_unit_truncates() {
        // 1.5 units for 1 second: 31_668_017 * 1.5 = 47_502_025.5
        assert_eq!(rate().accrue(MIN_DEPOSIT * 3 / 2, 1), Some(47_502_025));
    }

    #[test]
    fn test_large_principal_long_period() {
        // 1,000,000 ether for ten years must not overflow
        let principal = 1_000_000 * 1_000_000_000_000_000_000u128;
        let elapsed = 10 * 31_577_600u64;
        let expected = 100_000_000 * PER_SECOND * elapsed as u128;
        assert_eq!(rate().accrue(principal, elapsed), Some(expected));
    }

    #[test]
    fn test_overflow_is_none() {
        assert_eq!(rate().accrue(Wei::MAX, u64::MAX), None);
    }

    #[test]
    fn test_zero_unit_is_none() {
        assert_eq!(AccrualRate::new(PER_SECOND, 0).accrue(1, 1), None);
    }
}
