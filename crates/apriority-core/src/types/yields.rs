//! Yield inputs and derived figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ApriorityError, ApriorityResult, PAYMENT_INTERVAL_FIELD};

/// Days in the simplified year used for annualization and payback.
pub const DAYS_PER_YEAR: u32 = 365;

/// Days in the simplified month used for payback decomposition.
pub const DAYS_PER_MONTH: u32 = 30;

const MAX_MONTHS: u32 = 11;

/// Income terms for a single yield computation.
///
/// # Example
///
/// ```rust
/// use apriority_core::types::YieldInput;
/// use rust_decimal_macros::dec;
///
/// let input = YieldInput::new(dec!(10), 30, dec!(100));
/// assert!(input.validate().is_ok());
/// assert!(YieldInput::new(dec!(10), 0, dec!(100)).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldInput {
    /// Income paid per NFT every interval
    pub income_per_nft: Decimal,
    /// Days between payments
    pub payment_interval_days: u32,
    /// Floor price of the collection
    pub floor_price: Decimal,
}

impl YieldInput {
    /// Creates new yield input.
    #[must_use]
    pub fn new(income_per_nft: Decimal, payment_interval_days: u32, floor_price: Decimal) -> Self {
        Self {
            income_per_nft,
            payment_interval_days,
            floor_price,
        }
    }

    /// Validates the income terms and the floor price.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a zero interval, non-positive income or negative floor.
    /// - `UndefinedYield` for a zero floor price.
    pub fn validate(&self) -> ApriorityResult<()> {
        if self.payment_interval_days == 0 {
            return Err(ApriorityError::invalid_input(
                PAYMENT_INTERVAL_FIELD,
                "must be at least one day",
            ));
        }
        if self.income_per_nft <= Decimal::ZERO {
            return Err(ApriorityError::invalid_input(
                "income_per_nft",
                format!("must be positive, got {}", self.income_per_nft),
            ));
        }
        if self.floor_price < Decimal::ZERO {
            return Err(ApriorityError::invalid_input(
                "floor_price",
                format!("must not be negative, got {}", self.floor_price),
            ));
        }
        if self.floor_price.is_zero() {
            return Err(ApriorityError::undefined_yield(
                "collection has no floor price",
            ));
        }
        Ok(())
    }
}

/// Time until cumulative income covers the floor price.
///
/// Uses a simplified calendar of 365-day years and 30-day months. Twelve
/// 30-day months cover only 360 days, so the last five days of a year are
/// clamped into `11 months 29 days`; `years * 365 + months * 30 + days`
/// therefore never exceeds the whole-day total it was built from.
///
/// # Example
///
/// ```rust
/// use apriority_core::types::PaybackPeriod;
///
/// let period = PaybackPeriod::from_days(400);
/// assert_eq!((period.years, period.months, period.days), (1, 1, 5));
/// assert_eq!(period.total_days(), 400);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaybackPeriod {
    /// Whole 365-day years
    pub years: u64,
    /// Whole 30-day months, 0..=11
    pub months: u32,
    /// Remaining days, 0..=29
    pub days: u32,
}

impl PaybackPeriod {
    /// Decomposes a whole-day total into years, months and days.
    #[must_use]
    pub fn from_days(total_days: u64) -> Self {
        let years = total_days / u64::from(DAYS_PER_YEAR);
        // remainder < 365, fits in u32
        let remaining = (total_days % u64::from(DAYS_PER_YEAR)) as u32;
        let months = (remaining / DAYS_PER_MONTH).min(MAX_MONTHS);
        let days = (remaining - months * DAYS_PER_MONTH).min(DAYS_PER_MONTH - 1);
        Self {
            years,
            months,
            days,
        }
    }

    /// Reconstructs the whole-day total in the simplified calendar.
    #[must_use]
    pub fn total_days(&self) -> u64 {
        self.years * u64::from(DAYS_PER_YEAR)
            + u64::from(self.months) * u64::from(DAYS_PER_MONTH)
            + u64::from(self.days)
    }
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}m {}d", self.years, self.months, self.days)
    }
}

/// Annualized yield and payback period derived from a [`YieldInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldResult {
    /// APR in percent, rounded to two decimal places
    pub apr: Decimal,
    /// Payback period
    pub payback_period: PaybackPeriod,
}

impl fmt::Display for YieldResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}% APR, payback {}", self.apr, self.payback_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_rejects_zero_interval() {
        let err = YieldInput::new(dec!(1), 0, dec!(10)).validate().unwrap_err();
        assert!(matches!(err, ApriorityError::InvalidInput { .. }));
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn test_validate_rejects_non_positive_income() {
        for income in [dec!(0), dec!(-1)] {
            let err = YieldInput::new(income, 7, dec!(10)).validate().unwrap_err();
            assert!(matches!(err, ApriorityError::InvalidInput { ref field, .. } if field == "income_per_nft"));
        }
    }

    #[test]
    fn test_validate_floor() {
        let negative = YieldInput::new(dec!(1), 7, dec!(-3)).validate().unwrap_err();
        assert!(matches!(negative, ApriorityError::InvalidInput { .. }));

        let zero = YieldInput::new(dec!(1), 7, dec!(0)).validate().unwrap_err();
        assert!(matches!(zero, ApriorityError::UndefinedYield { .. }));
    }

    #[test]
    fn test_payback_decomposition() {
        assert_eq!(PaybackPeriod::from_days(0), PaybackPeriod::default());
        assert_eq!(
            PaybackPeriod::from_days(300),
            PaybackPeriod { years: 0, months: 10, days: 0 }
        );
        assert_eq!(
            PaybackPeriod::from_days(365),
            PaybackPeriod { years: 1, months: 0, days: 0 }
        );
        assert_eq!(
            PaybackPeriod::from_days(400),
            PaybackPeriod { years: 1, months: 1, days: 5 }
        );
    }

    #[test]
    fn test_payback_year_tail_is_clamped() {
        for days in 360..365 {
            let period = PaybackPeriod::from_days(days);
            assert_eq!(period, PaybackPeriod { years: 0, months: 11, days: 29 });
            assert!(period.total_days() <= days);
        }
        let next_year_tail = PaybackPeriod::from_days(365 + 362);
        assert_eq!(next_year_tail, PaybackPeriod { years: 1, months: 11, days: 29 });
    }

    #[test]
    fn test_payback_roundtrip_total() {
        for days in [0, 1, 29, 30, 359, 365, 366, 1000, 36_500] {
            assert_eq!(PaybackPeriod::from_days(days).total_days(), days);
        }
    }

    #[test]
    fn test_display() {
        let result = YieldResult {
            apr: dec!(121.67),
            payback_period: PaybackPeriod::from_days(300),
        };
        assert_eq!(result.to_string(), "121.67% APR, payback 0y 10m 0d");
    }
}
