//! Error types for yield calculations.
//!
//! Every failure of the calculation boundary is reported through
//! [`ApriorityError`]; a computation either yields a complete result or one
//! of these variants, never a partial or non-finite value.

use thiserror::Error;

/// A specialized Result type for APRiority operations.
pub type ApriorityResult<T> = Result<T, ApriorityError>;

/// Field name used when the payment interval is rejected.
pub const PAYMENT_INTERVAL_FIELD: &str = "payment_interval_days";

/// The main error type for yield calculations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApriorityError {
    /// Input rejected before any arithmetic was attempted.
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        /// Name of the offending input.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The collection has no usable floor price, so no yield exists.
    #[error("Yield not computable: {reason}")]
    UndefinedYield {
        /// Description of the missing market data.
        reason: String,
    },

    /// Decimal arithmetic overflowed.
    #[error("Mathematical error: {reason}")]
    MathError {
        /// Description of the error.
        reason: String,
    },
}

impl ApriorityError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an undefined yield error.
    #[must_use]
    pub fn undefined_yield(reason: impl Into<String>) -> Self {
        Self::UndefinedYield {
            reason: reason.into(),
        }
    }

    /// Creates a math error.
    #[must_use]
    pub fn math_error(reason: impl Into<String>) -> Self {
        Self::MathError {
            reason: reason.into(),
        }
    }

    /// Returns true if the failure stems from a zero divisor: a zero floor
    /// price or a zero payment interval.
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        match self {
            Self::UndefinedYield { .. } => true,
            Self::InvalidInput { field, .. } => field == PAYMENT_INTERVAL_FIELD,
            Self::MathError { .. } => false,
        }
    }
}
