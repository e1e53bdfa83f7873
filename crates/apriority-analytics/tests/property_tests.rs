//! Property-based tests for calculator and assembler invariants.
//!
//! These tests verify properties that must hold for every valid input:
//! - APR equals the rounded closed-form expression
//! - Payback months and days stay in range and never exceed the truncated total
//! - Payback days agree with `floor / (income / interval)`
//! - Assembling twice yields structurally equal responses
//! - Zero divisors always produce a defined error

use apriority_analytics::prelude::*;
use apriority_core::types::{CollectionFlags, NftCollection, PaybackPeriod};
use apriority_core::ApriorityError;
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

// =============================================================================
// GENERATORS
// =============================================================================

/// Positive decimal with two decimal places, 0.01 to 100_000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn interval() -> impl Strategy<Value = u32> {
    1u32..=3650
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn apr_matches_closed_form(
        income in positive_amount(),
        days in interval(),
        floor in positive_amount(),
    ) {
        let expected = (income / Decimal::from(days) * Decimal::from(365) / floor
            * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        prop_assert_eq!(compute_apr(income, days, floor).unwrap(), expected);
    }

    #[test]
    fn payback_components_in_range(
        income in positive_amount(),
        days in interval(),
        floor in positive_amount(),
    ) {
        let period = compute_payback_period(income, days, floor).unwrap();
        prop_assert!(period.months <= 11);
        prop_assert!(period.days <= 29);

        let total = payback_days(income, days, floor).unwrap().floor();
        prop_assert!(Decimal::from(period.total_days()) <= total);
    }

    #[test]
    fn payback_agrees_with_daily_income_form(
        income in positive_amount(),
        days in interval(),
        floor in positive_amount(),
    ) {
        // floor / (income / interval), divided the long way round
        let daily_income = income / Decimal::from(days);
        let literal = floor / daily_income;
        let tolerance = Decimal::new(1, 6);

        let exact = payback_days(income, days, floor).unwrap();
        prop_assert!((exact - literal).abs() <= tolerance);

        let period = compute_payback_period(income, days, floor).unwrap();
        prop_assert!(Decimal::from(period.total_days()) <= (literal + tolerance).floor());
    }

    #[test]
    fn decomposition_is_exact_outside_year_tail(total in 0u64..1_000_000) {
        let period = PaybackPeriod::from_days(total);
        if total % 365 < 360 {
            prop_assert_eq!(period.total_days(), total);
        } else {
            prop_assert!(total - period.total_days() <= 5);
        }
    }

    #[test]
    fn assemble_is_idempotent(
        income in positive_amount(),
        days in interval(),
        floor in positive_amount(),
        regular in any::<bool>(),
        risky in any::<bool>(),
    ) {
        let collection = NftCollection::new("EQ-prop", "Property").with_floor_price(floor);
        let options = AssembleOptions::new().with_flags(CollectionFlags::new(regular, risky));
        let first = assemble(&collection, income, days, options.clone()).unwrap();
        let second = assemble(&collection, income, days, options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn zero_floor_always_errors(income in positive_amount(), days in interval()) {
        let err = compute_yield(income, days, Decimal::ZERO).unwrap_err();
        prop_assert!(
            matches!(err, ApriorityError::UndefinedYield { .. }),
            "unexpected error: {:?}",
            err
        );
    }

    #[test]
    fn zero_interval_always_errors(income in positive_amount(), floor in positive_amount()) {
        let err = compute_yield(income, 0, floor).unwrap_err();
        prop_assert!(err.is_division_by_zero());
    }
}
