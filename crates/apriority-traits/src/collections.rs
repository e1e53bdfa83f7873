//! Collection store and price oracle traits.
//!
//! - [`CollectionStore`]: Curated income terms and payment history of tracked collections
//! - [`CollectionMetadataSource`]: Collection metadata and floor price from the price oracle
//! - [`OwnershipVerifier`]: Wallet ownership checks against the chain
//!
//! Tracked collections change rarely (curated by hand); oracle data is live.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use apriority_core::types::{CollectionFlags, NftCollection, PaymentHistory};

use crate::error::TraitError;
use crate::ids::{CollectionAddress, WalletAddress};

// =============================================================================
// TRACKED COLLECTIONS
// =============================================================================

/// Income terms of a collection listed on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedCollection {
    /// Collection address
    pub address: CollectionAddress,
    /// Income paid per NFT every interval
    pub income: Decimal,
    /// Days between payments
    pub payment_interval_days: u32,
    /// Income is paid out on a regular schedule
    #[serde(default)]
    pub regular_payments: bool,
    /// Collection has been marked as risky
    #[serde(default, rename = "unsafe")]
    pub is_unsafe: bool,
}

impl TrackedCollection {
    /// Create a tracked collection without flags.
    pub fn new(address: impl Into<CollectionAddress>, income: Decimal, payment_interval_days: u32) -> Self {
        Self {
            address: address.into(),
            income,
            payment_interval_days,
            regular_payments: false,
            is_unsafe: false,
        }
    }

    /// Set the curated flags.
    pub fn with_flags(mut self, flags: CollectionFlags) -> Self {
        self.regular_payments = flags.regular_payments;
        self.is_unsafe = flags.is_unsafe;
        self
    }

    /// Curated flags of this collection.
    pub fn flags(&self) -> CollectionFlags {
        CollectionFlags::new(self.regular_payments, self.is_unsafe)
    }
}

/// Trait for the store of tracked collections.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// List all tracked collections.
    async fn list_collections(&self) -> Result<Vec<TrackedCollection>, TraitError>;

    /// Get a tracked collection by address.
    async fn get_collection(
        &self,
        address: &CollectionAddress,
    ) -> Result<Option<TrackedCollection>, TraitError>;

    /// Get the recorded payouts of a collection, if any were published.
    async fn payment_history(
        &self,
        address: &CollectionAddress,
    ) -> Result<Option<PaymentHistory>, TraitError>;
}

// =============================================================================
// PRICE ORACLE
// =============================================================================

/// Trait for collection metadata providers (marketplace GraphQL, indexers).
#[async_trait]
pub trait CollectionMetadataSource: Send + Sync {
    /// Get metadata and floor price for a collection.
    async fn get_metadata(
        &self,
        address: &CollectionAddress,
    ) -> Result<Option<NftCollection>, TraitError>;
}

/// Trait for on-chain ownership checks.
#[async_trait]
pub trait OwnershipVerifier: Send + Sync {
    /// Returns true if `wallet` holds at least one item of `collection`.
    async fn owns_item(
        &self,
        wallet: &WalletAddress,
        collection: &CollectionAddress,
    ) -> Result<bool, TraitError>;
}
