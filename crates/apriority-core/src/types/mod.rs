//! Domain types for NFT yield analytics.
//!
//! - [`NftCollection`]: Collection metadata reported by the price oracle
//! - [`CollectionFlags`]: Curated risk flags of a tracked collection
//! - [`PaymentHistory`]: Recorded payouts per NFT
//! - [`YieldInput`]: Income terms and floor price for one computation
//! - [`YieldResult`]: APR and payback period derived from a [`YieldInput`]
//! - [`PaybackPeriod`]: Years/months/days decomposition in a 30-day-month calendar

mod collection;
mod payment;
mod yields;

pub use collection::{CollectionFlags, NftCollection};
pub use payment::{Payment, PaymentHistory};
pub use yields::{PaybackPeriod, YieldInput, YieldResult, DAYS_PER_MONTH, DAYS_PER_YEAR};
