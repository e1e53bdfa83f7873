//! # APRiority Traits
//!
//! Trait definitions for the external collaborators of APRiority.
//!
//! This crate contains ONLY trait definitions and the records they exchange.
//! All implementations are in separate extension crates.
//!
//! ## Module Structure
//!
//! - [`collections`]: Tracked collection store, price oracle, ownership checks
//! - [`community`]: Listing requests and comments
//! - [`ids`]: Collection and wallet addresses
//!
//! ## Dependency Injection
//!
//! The engine receives every collaborator through a [`DataProvider`]:
//!
//! ```ignore
//! YieldEngineBuilder::new()
//!     .with_config(EngineConfig::default())
//!     .with_data_provider(Arc::new(DataProvider { .. }))
//!     .build()
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collections;
pub mod community;
pub mod error;
pub mod ids;

use std::sync::Arc;

use crate::collections::{CollectionMetadataSource, CollectionStore, OwnershipVerifier};
use crate::community::{CommentStore, ListingStore};

// Re-export commonly used types
pub use error::TraitError;
pub use ids::*;

/// Bundle of all collaborators used by the engine.
#[derive(Clone)]
pub struct DataProvider {
    /// Tracked collections and payment history
    pub collections: Arc<dyn CollectionStore>,
    /// Collection metadata and floor prices
    pub metadata: Arc<dyn CollectionMetadataSource>,
    /// Wallet ownership checks
    pub ownership: Arc<dyn OwnershipVerifier>,
    /// Listing request storage
    pub listings: Arc<dyn ListingStore>,
    /// Comment storage
    pub comments: Arc<dyn CommentStore>,
}
