//! Payback period.

use apriority_core::types::{PaybackPeriod, YieldInput};
use apriority_core::{ApriorityError, ApriorityResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Calculate the number of days until income covers the floor price.
///
/// # Formula
///
/// ```text
/// daily_income = income_per_nft / payment_interval_days
/// payback_days = floor_price / daily_income
/// ```
///
/// Evaluated as `floor_price * payment_interval_days / income_per_nft`, which
/// is the same quantity with a single rounding step. The value is returned
/// untruncated.
///
/// # Errors
///
/// Same failure policy as [`compute_apr`](super::compute_apr).
pub fn payback_days(
    income_per_nft: Decimal,
    payment_interval_days: u32,
    floor_price: Decimal,
) -> ApriorityResult<Decimal> {
    YieldInput::new(income_per_nft, payment_interval_days, floor_price).validate()?;

    floor_price
        .checked_mul(Decimal::from(payment_interval_days))
        .and_then(|scaled| scaled.checked_div(income_per_nft))
        .ok_or_else(|| ApriorityError::math_error("payback days overflowed decimal range"))
}

/// Calculate the payback period as years, months and days.
///
/// Fractional days are truncated before decomposition, so a payback of
/// 300.9 days is reported as 300 days (`0y 10m 0d`). Decomposition uses
/// 365-day years and 30-day months; see [`PaybackPeriod::from_days`].
///
/// # Example
///
/// ```rust
/// use apriority_analytics::yields::compute_payback_period;
/// use rust_decimal_macros::dec;
///
/// let period = compute_payback_period(dec!(10), 30, dec!(100)).unwrap();
/// assert_eq!((period.years, period.months, period.days), (0, 10, 0));
/// ```
pub fn compute_payback_period(
    income_per_nft: Decimal,
    payment_interval_days: u32,
    floor_price: Decimal,
) -> ApriorityResult<PaybackPeriod> {
    let days = payback_days(income_per_nft, payment_interval_days, floor_price)?;
    let whole_days = days.trunc().to_u64().ok_or_else(|| {
        ApriorityError::math_error(format!("payback of {days} days does not fit a day count"))
    })?;

    Ok(PaybackPeriod::from_days(whole_days))
}
