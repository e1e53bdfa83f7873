//! # APRiority Analytics
//!
//! Yield calculator and response assembly for NFT collections.
//!
//! - [`yields`]: APR, payback period and average APR from income terms
//! - [`response`]: Merging collection metadata with computed figures
//!
//! Everything in this crate is synchronous and side-effect free; it can be
//! called from any number of threads or tasks without coordination.
//!
//! ## Example
//!
//! ```rust
//! use apriority_analytics::prelude::*;
//! use apriority_core::types::{CollectionFlags, NftCollection};
//! use rust_decimal_macros::dec;
//!
//! let collection = NftCollection::new("EQC-punks", "TON Punks").with_floor_price(dec!(365));
//! let options = AssembleOptions::new().with_flags(CollectionFlags::new(true, false));
//! let response = assemble(&collection, dec!(1), 1, options).unwrap();
//! assert_eq!(response.apr, dec!(100));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_pass_by_value)]

pub mod response;
pub mod yields;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::response::{assemble, AssembleOptions, YieldResponse};
    pub use crate::yields::{
        average_apr, compute_apr, compute_payback_period, compute_yield, payback_days,
        ComputeYield,
    };
}

pub use response::{assemble, AssembleOptions, YieldResponse};
pub use yields::{compute_apr, compute_payback_period, compute_yield};
