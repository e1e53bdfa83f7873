//! Yield calculations.
//!
//! Pure arithmetic turning income terms and a floor price into:
//!
//! - **APR**: annualized income relative to the floor price, in percent,
//!   rounded to two places with round-half-to-even.
//! - **Payback period**: whole days until income covers the floor price,
//!   decomposed into 365-day years and 30-day months.
//!
//! Both share one failure policy: a zero interval or non-positive income is
//! `InvalidInput`, a zero floor is `UndefinedYield`, and decimal overflow is
//! `MathError`. Nothing here performs I/O or holds state.
//!
//! # Usage
//!
//! ```rust
//! use apriority_analytics::yields::compute_yield;
//! use rust_decimal_macros::dec;
//!
//! let result = compute_yield(dec!(1), 1, dec!(365)).unwrap();
//! assert_eq!(result.apr, dec!(100));
//! assert_eq!(result.payback_period.years, 1);
//! ```

mod apr;
mod payback;

pub use apr::{average_apr, compute_apr, APR_DECIMAL_PLACES};
pub use payback::{compute_payback_period, payback_days};

use apriority_core::types::{YieldInput, YieldResult};
use apriority_core::ApriorityResult;
use rust_decimal::Decimal;

/// Compute APR and payback period in one call.
///
/// # Errors
///
/// Fails with the first error of [`compute_apr`] or
/// [`compute_payback_period`]; no partial result is returned.
pub fn compute_yield(
    income_per_nft: Decimal,
    payment_interval_days: u32,
    floor_price: Decimal,
) -> ApriorityResult<YieldResult> {
    Ok(YieldResult {
        apr: compute_apr(income_per_nft, payment_interval_days, floor_price)?,
        payback_period: compute_payback_period(income_per_nft, payment_interval_days, floor_price)?,
    })
}

/// Extension trait computing a [`YieldResult`] directly from its input.
pub trait ComputeYield {
    /// Compute APR and payback period.
    fn compute(&self) -> ApriorityResult<YieldResult>;
}

impl ComputeYield for YieldInput {
    fn compute(&self) -> ApriorityResult<YieldResult> {
        compute_yield(
            self.income_per_nft,
            self.payment_interval_days,
            self.floor_price,
        )
    }
}
