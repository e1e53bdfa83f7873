//! Response assembly.
//!
//! Merges collection metadata with computed yield figures into a single
//! [`YieldResponse`]. Different views need different subsets of fields, so
//! the optional groups are selected with [`AssembleOptions`] instead of
//! separate near-identical response types:
//!
//! | View | Flags | Payment history |
//! |---|---|---|
//! | Full collection view | yes | yes |
//! | Calculator preview | no | no |
//! | Listing request | no | no |
//!
//! Omitted groups are absent from the serialized output, not `null`.

use apriority_core::types::{
    CollectionFlags, NftCollection, PaybackPeriod, PaymentHistory, YieldResult,
};
use apriority_core::{ApriorityError, ApriorityResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::yields::{average_apr, compute_yield};

/// Optional groups to include in an assembled response.
///
/// # Example
///
/// ```rust
/// use apriority_analytics::response::AssembleOptions;
/// use apriority_core::types::{CollectionFlags, PaymentHistory};
///
/// let calculator = AssembleOptions::new();
/// assert!(calculator.flags().is_none());
///
/// let full = AssembleOptions::new()
///     .with_flags(CollectionFlags::new(true, false))
///     .with_payment_history(PaymentHistory::default());
/// assert!(full.flags().is_some());
/// assert!(full.payment_history().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembleOptions {
    flags: Option<CollectionFlags>,
    payment_history: Option<PaymentHistory>,
}

impl AssembleOptions {
    /// Options for a bare response: collection, APR and payback only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Includes `regular_payments` and `unsafe`.
    #[must_use]
    pub fn with_flags(mut self, flags: CollectionFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Includes the payment history and the APR implied by it.
    #[must_use]
    pub fn with_payment_history(mut self, history: PaymentHistory) -> Self {
        self.payment_history = Some(history);
        self
    }

    /// Flags to include, if any.
    #[must_use]
    pub fn flags(&self) -> Option<&CollectionFlags> {
        self.flags.as_ref()
    }

    /// Payment history to include, if any.
    #[must_use]
    pub fn payment_history(&self) -> Option<&PaymentHistory> {
        self.payment_history.as_ref()
    }
}

/// Collection metadata combined with its computed yield figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldResponse {
    /// Collection metadata, copied from the oracle
    pub collection: NftCollection,
    /// APR in percent
    pub apr: Decimal,
    /// APR implied by the mean recorded payout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_apr: Option<Decimal>,
    /// Payback period
    pub payback_period: PaybackPeriod,
    /// Curated flags, serialized inline as `regular_payments` and `unsafe`
    #[serde(flatten)]
    pub flags: Option<CollectionFlags>,
    /// Recorded payouts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments_history: Option<PaymentHistory>,
}

impl YieldResponse {
    /// The APR and payback period of this response.
    #[must_use]
    pub fn yield_result(&self) -> YieldResult {
        YieldResult {
            apr: self.apr,
            payback_period: self.payback_period,
        }
    }
}

/// Assemble a response for a collection and its income terms.
///
/// Computes the yield once from the collection's floor price and attaches
/// the groups requested in `options`. The collection is cloned into the
/// response and never modified.
///
/// # Errors
///
/// - `UndefinedYield` if the collection has no floor price or a zero one
/// - any calculator error for invalid income terms
///
/// # Example
///
/// ```rust
/// use apriority_analytics::response::{assemble, AssembleOptions};
/// use apriority_core::types::NftCollection;
/// use rust_decimal_macros::dec;
///
/// let collection = NftCollection::new("EQC-punks", "TON Punks").with_floor_price(dec!(100));
/// let response = assemble(&collection, dec!(10), 30, AssembleOptions::new()).unwrap();
/// assert_eq!(response.apr, dec!(121.67));
/// assert!(response.flags.is_none());
/// ```
pub fn assemble(
    collection: &NftCollection,
    income_per_nft: Decimal,
    payment_interval_days: u32,
    options: AssembleOptions,
) -> ApriorityResult<YieldResponse> {
    let floor_price = collection.floor_price.ok_or_else(|| {
        ApriorityError::undefined_yield(format!(
            "collection {} has no floor price",
            collection.address
        ))
    })?;

    let result = compute_yield(income_per_nft, payment_interval_days, floor_price)?;

    let average_apr = match options.payment_history.as_ref() {
        Some(history) => average_apr(history, payment_interval_days, floor_price)?,
        None => None,
    };

    Ok(YieldResponse {
        collection: collection.clone(),
        apr: result.apr,
        average_apr,
        payback_period: result.payback_period,
        flags: options.flags,
        payments_history: options.payment_history,
    })
}
