//! # APRiority Ext File
//!
//! File-based and in-memory collaborators for the APRiority engine.
//!
//! This crate provides default implementations for testing, local
//! development and static deployments:
//! - JSON-directory collection store (the published data repository, checked out locally)
//! - In-memory collection store, listing store and comment store
//! - Static metadata source and ownership verifier
//!
//! For live floor prices and ownership, plug in oracle-backed implementations
//! of the same traits.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod collections;
mod community;

pub use collections::*;
pub use community::*;

use std::path::Path;
use std::sync::Arc;

use apriority_traits::collections::{CollectionMetadataSource, OwnershipVerifier};
use apriority_traits::error::TraitError;
use apriority_traits::DataProvider;

/// Concrete in-memory collaborators, kept typed so callers can seed them.
#[derive(Clone, Default)]
pub struct MemoryBackends {
    /// Tracked collections and payment history
    pub collections: Arc<InMemoryCollectionStore>,
    /// Collection metadata
    pub metadata: Arc<StaticMetadataSource>,
    /// Ownership records
    pub ownership: Arc<StaticOwnershipVerifier>,
    /// Listing requests
    pub listings: Arc<InMemoryListingStore>,
    /// Comments
    pub comments: Arc<InMemoryCommentStore>,
}

impl MemoryBackends {
    /// Create empty backends.
    pub fn new() -> Self {
        Self::default()
    }

    /// Type-erased provider sharing these backends.
    pub fn provider(&self) -> DataProvider {
        DataProvider {
            collections: self.collections.clone(),
            metadata: self.metadata.clone(),
            ownership: self.ownership.clone(),
            listings: self.listings.clone(),
            comments: self.comments.clone(),
        }
    }
}

/// Create a provider with every collaborator in memory.
pub fn create_memory_provider() -> DataProvider {
    MemoryBackends::new().provider()
}

/// Create a provider reading tracked collections from a JSON directory.
///
/// Listing requests and comments are kept in memory.
pub fn create_file_provider(
    root: impl AsRef<Path>,
    metadata: Arc<dyn CollectionMetadataSource>,
    ownership: Arc<dyn OwnershipVerifier>,
) -> Result<DataProvider, TraitError> {
    Ok(DataProvider {
        collections: Arc::new(JsonCollectionStore::new(root)?),
        metadata,
        ownership,
        listings: Arc::new(InMemoryListingStore::new()),
        comments: Arc::new(InMemoryCommentStore::new()),
    })
}
