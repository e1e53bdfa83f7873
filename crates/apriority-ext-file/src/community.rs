//! In-memory listing request and comment stores.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use apriority_traits::community::*;
use apriority_traits::error::TraitError;
use apriority_traits::ids::{CollectionAddress, UserId};

/// In-memory listing request store preserving submission order.
pub struct InMemoryListingStore {
    requests: RwLock<Vec<ListingRequest>>,
    next_id: AtomicU64,
}

impl InMemoryListingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryListingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingStore for InMemoryListingStore {
    async fn add(&self, request: &NewListingRequest) -> Result<ListingRequest, TraitError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = ListingRequest::from_new(id, request, Utc::now());
        self.requests.write().push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<ListingRequest>, TraitError> {
        Ok(self.requests.read().clone())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<ListingRequest>, TraitError> {
        Ok(self
            .requests
            .read()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, address: &CollectionAddress) -> Result<bool, TraitError> {
        let mut requests = self.requests.write();
        match requests.iter().position(|r| &r.address == address) {
            Some(index) => {
                requests.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// In-memory comment store preserving submission order.
pub struct InMemoryCommentStore {
    comments: RwLock<Vec<Comment>>,
    next_id: AtomicU64,
}

impl InMemoryCommentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            comments: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryCommentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn add(
        &self,
        address: &CollectionAddress,
        comment: &NewComment,
    ) -> Result<Comment, TraitError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = Comment::from_new(id, address, comment, Utc::now());
        self.comments.write().push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, address: &CollectionAddress) -> Result<Vec<Comment>, TraitError> {
        Ok(self
            .comments
            .read()
            .iter()
            .filter(|c| &c.address == address)
            .cloned()
            .collect())
    }
}
