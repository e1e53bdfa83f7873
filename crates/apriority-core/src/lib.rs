//! # APRiority Core
//!
//! Core types and error definitions for APRiority NFT yield analytics.
//!
//! This crate provides the building blocks shared by the calculator, the
//! collaborator traits and the engine:
//!
//! - **Types**: Collection metadata, payment history, yield inputs and results
//! - **Errors**: [`ApriorityError`], the single failure type of the calculation boundary
//!
//! ## Example
//!
//! ```rust
//! use apriority_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let input = YieldInput::new(dec!(1), 1, dec!(365));
//! assert!(input.validate().is_ok());
//! assert_eq!(PaybackPeriod::from_days(365).years, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ApriorityError, ApriorityResult};
    pub use crate::types::{
        CollectionFlags, NftCollection, PaybackPeriod, Payment, PaymentHistory, YieldInput,
        YieldResult,
    };
}

// Re-export commonly used types at crate root
pub use error::{ApriorityError, ApriorityResult};
pub use types::{NftCollection, PaybackPeriod, PaymentHistory, YieldInput, YieldResult};
