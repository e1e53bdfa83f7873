//! File-based and in-memory collection sources.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use parking_lot::RwLock;

use apriority_core::types::{NftCollection, PaymentHistory};
use apriority_traits::collections::*;
use apriority_traits::error::TraitError;
use apriority_traits::ids::{CollectionAddress, WalletAddress};

// =============================================================================
// IN-MEMORY COLLECTION STORE
// =============================================================================

/// In-memory store of tracked collections and their payment history.
#[derive(Default)]
pub struct InMemoryCollectionStore {
    collections: DashMap<CollectionAddress, TrackedCollection>,
    payments: DashMap<CollectionAddress, PaymentHistory>,
}

impl InMemoryCollectionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a tracked collection.
    pub fn insert(&self, collection: TrackedCollection) {
        self.collections.insert(collection.address.clone(), collection);
    }

    /// Insert or replace the payment history of a collection.
    pub fn set_payment_history(&self, address: CollectionAddress, history: PaymentHistory) {
        self.payments.insert(address, history);
    }

    /// Remove a tracked collection and its history.
    pub fn remove(&self, address: &CollectionAddress) -> Option<TrackedCollection> {
        self.payments.remove(address);
        self.collections.remove(address).map(|(_, c)| c)
    }

    /// Number of tracked collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Returns true if nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

#[async_trait]
impl CollectionStore for InMemoryCollectionStore {
    async fn list_collections(&self) -> Result<Vec<TrackedCollection>, TraitError> {
        let mut collections: Vec<_> = self.collections.iter().map(|r| r.value().clone()).collect();
        collections.sort_by(|a, b| a.address.cmp(&b.address));
        Ok(collections)
    }

    async fn get_collection(
        &self,
        address: &CollectionAddress,
    ) -> Result<Option<TrackedCollection>, TraitError> {
        Ok(self.collections.get(address).map(|c| c.clone()))
    }

    async fn payment_history(
        &self,
        address: &CollectionAddress,
    ) -> Result<Option<PaymentHistory>, TraitError> {
        Ok(self.payments.get(address).map(|h| h.clone()))
    }
}

// =============================================================================
// JSON DIRECTORY COLLECTION STORE
// =============================================================================

/// Collection store backed by a directory of JSON documents.
///
/// Layout, mirroring the published data repository:
///
/// ```text
/// <root>/collections/<address>.json   TrackedCollection
/// <root>/payments/<address>.json      PaymentHistory
/// ```
///
/// Documents are read once on construction and again on [`reload`](Self::reload).
/// Each reload builds a complete snapshot before publishing it, so readers
/// see either the old contents or the new ones.
pub struct JsonCollectionStore {
    root: PathBuf,
    snapshot: RwLock<Arc<InMemoryCollectionStore>>,
}

impl JsonCollectionStore {
    /// Subdirectory holding tracked collection documents.
    pub const COLLECTIONS_DIR: &'static str = "collections";
    /// Subdirectory holding payment history documents.
    pub const PAYMENTS_DIR: &'static str = "payments";

    /// Open a store rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, TraitError> {
        let store = Self {
            root: root.as_ref().to_path_buf(),
            snapshot: RwLock::new(Arc::new(InMemoryCollectionStore::new())),
        };
        store.reload()?;
        Ok(store)
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Re-read every document. Returns the number of tracked collections.
    ///
    /// A malformed document fails the reload and leaves the previous
    /// contents untouched.
    pub fn reload(&self) -> Result<usize, TraitError> {
        let collections: Vec<TrackedCollection> =
            read_documents(&self.root.join(Self::COLLECTIONS_DIR))?
                .into_iter()
                .map(|(_, doc)| doc)
                .collect();
        let payments: Vec<(CollectionAddress, PaymentHistory)> =
            read_documents(&self.root.join(Self::PAYMENTS_DIR))?;

        let fresh = InMemoryCollectionStore::new();
        for collection in collections {
            fresh.insert(collection);
        }
        for (address, history) in payments {
            fresh.set_payment_history(address, history);
        }

        let count = fresh.len();
        *self.snapshot.write() = Arc::new(fresh);
        Ok(count)
    }

    /// The currently published contents.
    ///
    /// The returned handle is unaffected by later reloads.
    pub fn snapshot(&self) -> Arc<InMemoryCollectionStore> {
        self.snapshot.read().clone()
    }
}

/// Read every `*.json` file of a directory, keyed by file stem.
/// A missing directory is an empty source.
fn read_documents<T: serde::de::DeserializeOwned>(
    dir: &Path,
) -> Result<Vec<(CollectionAddress, T)>, TraitError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut documents = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let content = fs::read_to_string(&path)?;
        let document = serde_json::from_str(&content)
            .map_err(|e| TraitError::ParseError(format!("{}: {}", path.display(), e)))?;
        documents.push((CollectionAddress::new(stem), document));
    }
    Ok(documents)
}

#[async_trait]
impl CollectionStore for JsonCollectionStore {
    async fn list_collections(&self) -> Result<Vec<TrackedCollection>, TraitError> {
        self.snapshot().list_collections().await
    }

    async fn get_collection(
        &self,
        address: &CollectionAddress,
    ) -> Result<Option<TrackedCollection>, TraitError> {
        self.snapshot().get_collection(address).await
    }

    async fn payment_history(
        &self,
        address: &CollectionAddress,
    ) -> Result<Option<PaymentHistory>, TraitError> {
        self.snapshot().payment_history(address).await
    }
}

// =============================================================================
// STATIC ORACLE AND OWNERSHIP
// =============================================================================

/// Metadata source serving a fixed set of collections.
#[derive(Default)]
pub struct StaticMetadataSource {
    collections: DashMap<CollectionAddress, NftCollection>,
}

impl StaticMetadataSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace metadata, keyed by its address.
    pub fn insert(&self, collection: NftCollection) {
        self.collections
            .insert(CollectionAddress::new(&collection.address), collection);
    }
}

#[async_trait]
impl CollectionMetadataSource for StaticMetadataSource {
    async fn get_metadata(
        &self,
        address: &CollectionAddress,
    ) -> Result<Option<NftCollection>, TraitError> {
        Ok(self.collections.get(address).map(|c| c.clone()))
    }
}

/// Metadata source that knows no collection.
pub struct EmptyMetadataSource;

#[async_trait]
impl CollectionMetadataSource for EmptyMetadataSource {
    async fn get_metadata(
        &self,
        _address: &CollectionAddress,
    ) -> Result<Option<NftCollection>, TraitError> {
        Ok(None)
    }
}

/// Ownership verifier backed by an explicit set of holdings.
#[derive(Default)]
pub struct StaticOwnershipVerifier {
    holdings: DashSet<(WalletAddress, CollectionAddress)>,
}

impl StaticOwnershipVerifier {
    /// Create a verifier where nobody owns anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `wallet` holds an item of `collection`.
    pub fn grant(&self, wallet: WalletAddress, collection: CollectionAddress) {
        self.holdings.insert((wallet, collection));
    }

    /// Forget a holding.
    pub fn revoke(&self, wallet: &WalletAddress, collection: &CollectionAddress) {
        self.holdings.remove(&(wallet.clone(), collection.clone()));
    }
}

#[async_trait]
impl OwnershipVerifier for StaticOwnershipVerifier {
    async fn owns_item(
        &self,
        wallet: &WalletAddress,
        collection: &CollectionAddress,
    ) -> Result<bool, TraitError> {
        Ok(self.holdings.contains(&(wallet.clone(), collection.clone())))
    }
}
