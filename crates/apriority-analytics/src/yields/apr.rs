//! Annual percentage rate.

use apriority_core::types::{PaymentHistory, YieldInput, DAYS_PER_YEAR};
use apriority_core::{ApriorityError, ApriorityResult};
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept in a reported APR.
pub const APR_DECIMAL_PLACES: u32 = 2;

/// Calculate the APR of holding one NFT bought at the floor price.
///
/// # Formula
///
/// ```text
/// annual_income = income_per_nft / payment_interval_days * 365
/// APR = annual_income / floor_price * 100
/// ```
///
/// The result is rounded to two decimal places with round-half-to-even
/// (banker's rounding): `12.345` becomes `12.34`, `12.355` becomes `12.36`.
///
/// # Errors
///
/// - `InvalidInput` for a zero interval, non-positive income or negative floor
/// - `UndefinedYield` for a zero floor price
/// - `MathError` if the decimal arithmetic overflows
///
/// # Example
///
/// ```rust
/// use apriority_analytics::yields::compute_apr;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(compute_apr(dec!(10), 30, dec!(100)).unwrap(), dec!(121.67));
/// ```
pub fn compute_apr(
    income_per_nft: Decimal,
    payment_interval_days: u32,
    floor_price: Decimal,
) -> ApriorityResult<Decimal> {
    YieldInput::new(income_per_nft, payment_interval_days, floor_price).validate()?;

    let annual_income = annual_income(income_per_nft, payment_interval_days)?;
    let apr = annual_income
        .checked_div(floor_price)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| overflow("APR"))?;

    Ok(apr.round_dp_with_strategy(APR_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven))
}

/// Calculate the APR implied by the mean recorded payout.
///
/// Returns `Ok(None)` when the history is empty or its mean payout is not
/// positive, since no yield can be annualized from it.
pub fn average_apr(
    history: &PaymentHistory,
    payment_interval_days: u32,
    floor_price: Decimal,
) -> ApriorityResult<Option<Decimal>> {
    match history.mean_amount() {
        Some(mean) if mean > Decimal::ZERO => {
            compute_apr(mean, payment_interval_days, floor_price).map(Some)
        }
        _ => Ok(None),
    }
}

/// Income per NFT over a 365-day year.
fn annual_income(income_per_nft: Decimal, payment_interval_days: u32) -> ApriorityResult<Decimal> {
    income_per_nft
        .checked_div(Decimal::from(payment_interval_days))
        .and_then(|daily| daily.checked_mul(Decimal::from(DAYS_PER_YEAR)))
        .ok_or_else(|| overflow("annual income"))
}

fn overflow(what: &str) -> ApriorityError {
    ApriorityError::math_error(format!("{what} overflowed decimal range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use apriority_core::types::Payment;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_income() {
        // 10 / 30 * 365 = 121.666..., over a floor of 100
        assert_eq!(compute_apr(dec!(10), 30, dec!(100)).unwrap(), dec!(121.67));
    }

    #[test]
    fn test_daily_income_equal_to_floor_per_year() {
        assert_eq!(compute_apr(dec!(1), 1, dec!(365)).unwrap(), dec!(100));
    }

    #[test]
    fn test_weekly_income() {
        // 0.5 / 7 * 365 = 26.0714..., over 50 -> 52.142857...
        assert_eq!(compute_apr(dec!(0.5), 7, dec!(50)).unwrap(), dec!(52.14));
    }

    #[test]
    fn test_bankers_rounding() {
        // 1 / 1 * 365 / 800 * 100 = 45.625 exactly
        assert_eq!(compute_apr(dec!(1), 1, dec!(800)).unwrap(), dec!(45.62));
        // 1 / 1 * 365 / 16000 * 100 = 2.28125 -> 2.28
        assert_eq!(compute_apr(dec!(1), 1, dec!(16000)).unwrap(), dec!(2.28));
    }

    #[test]
    fn test_zero_floor_is_undefined() {
        let err = compute_apr(dec!(10), 30, Decimal::ZERO).unwrap_err();
        assert!(matches!(err, ApriorityError::UndefinedYield { .. }));
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let err = compute_apr(dec!(10), 0, dec!(100)).unwrap_err();
        assert!(matches!(err, ApriorityError::InvalidInput { .. }));
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn test_negative_income_is_rejected() {
        let err = compute_apr(dec!(-10), 30, dec!(100)).unwrap_err();
        assert!(matches!(err, ApriorityError::InvalidInput { .. }));
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = compute_apr(Decimal::MAX, 1, dec!(0.0000001)).unwrap_err();
        assert!(matches!(err, ApriorityError::MathError { .. }));
    }

    #[test]
    fn test_average_apr() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let history = PaymentHistory::new(vec![
            Payment::new(day(1), dec!(8)),
            Payment::new(day(2), dec!(12)),
        ]);
        // mean payout 10 -> same as the monthly scenario
        assert_eq!(
            average_apr(&history, 30, dec!(100)).unwrap(),
            Some(dec!(121.67))
        );
        assert_eq!(
            average_apr(&PaymentHistory::default(), 30, dec!(100)).unwrap(),
            None
        );
    }
}
