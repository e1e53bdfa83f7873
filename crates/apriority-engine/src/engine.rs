//! The yield engine.

use std::future::Future;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use rust_decimal::Decimal;
use serde::Serialize;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use apriority_analytics::response::{assemble, AssembleOptions, YieldResponse};
use apriority_core::error::ApriorityError;
use apriority_core::types::{NftCollection, PaymentHistory};
use apriority_traits::collections::TrackedCollection;
use apriority_traits::community::{
    Comment, CommentView, ListingRequest, NewComment, NewListingRequest,
};
use apriority_traits::ids::{CollectionAddress, UserId, WalletAddress};
use apriority_traits::{DataProvider, TraitError};

use crate::config::EngineConfig;
use crate::error::EngineError;

/// Outcome of a listing request submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingSubmission {
    /// The stored request
    pub request: ListingRequest,
    /// Listing view, `None` while the collection has no floor price
    pub view: Option<YieldResponse>,
}

/// Serves collection, calculator, listing and comment views on top of the
/// collaborators in a [`DataProvider`].
///
/// Every collaborator call is bounded by [`EngineConfig::fetch_timeout`].
/// List views fetch metadata for up to
/// [`EngineConfig::max_concurrent_fetches`] collections at once and keep the
/// order of the underlying store.
pub struct YieldEngine {
    config: EngineConfig,
    provider: Arc<DataProvider>,
}

impl YieldEngine {
    /// Create a new engine. Prefer [`YieldEngineBuilder`](crate::YieldEngineBuilder),
    /// which validates the configuration.
    pub fn new(config: EngineConfig, provider: Arc<DataProvider>) -> Self {
        info!(
            "Yield engine {} ready (timeout {}ms, {} concurrent fetches)",
            config.name, config.fetch_timeout_ms, config.max_concurrent_fetches
        );
        Self { config, provider }
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // =========================================================================
    // COLLECTIONS
    // =========================================================================

    /// Full view of one tracked collection: yield, flags and, when enabled,
    /// payment history with average APR.
    pub async fn collection_view(
        &self,
        address: &CollectionAddress,
    ) -> Result<YieldResponse, EngineError> {
        let tracked = self.tracked(address).await?;
        let metadata = self.require_metadata(address).await?;
        debug!("Collection view for {}", address);
        self.full_view(&tracked, &metadata).await
    }

    /// Full views of every tracked collection, in store order.
    ///
    /// Collections the oracle does not know are skipped, as are unpriced
    /// collections when `skip_unpriced_collections` is set.
    pub async fn collection_views(&self) -> Result<Vec<YieldResponse>, EngineError> {
        let tracked = self.fetch(self.provider.collections.list_collections()).await?;
        debug!("Building views for {} tracked collections", tracked.len());

        let views: Vec<Result<Option<YieldResponse>, EngineError>> = stream::iter(tracked)
            .map(|collection| self.tracked_entry(collection))
            .buffered(self.config.max_concurrent_fetches)
            .collect()
            .await;

        views.into_iter().filter_map(Result::transpose).collect()
    }

    /// Recorded payouts of a tracked collection.
    pub async fn payment_history(
        &self,
        address: &CollectionAddress,
    ) -> Result<PaymentHistory, EngineError> {
        self.fetch(self.provider.collections.payment_history(address))
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("payment history of {address}")))
    }

    /// Calculator preview for arbitrary income terms on any known collection.
    pub async fn calculate(
        &self,
        address: &CollectionAddress,
        income_per_nft: Decimal,
        payment_interval_days: u32,
    ) -> Result<YieldResponse, EngineError> {
        let metadata = self.require_metadata(address).await?;
        let view = assemble(
            &metadata,
            income_per_nft,
            payment_interval_days,
            AssembleOptions::new(),
        )?;
        debug!(
            "Calculator preview for {}: {} every {} days gives {}",
            address,
            income_per_nft,
            payment_interval_days,
            view.yield_result()
        );
        Ok(view)
    }

    /// Raw oracle metadata of a collection.
    pub async fn collection_metadata(
        &self,
        address: &CollectionAddress,
    ) -> Result<NftCollection, EngineError> {
        self.require_metadata(address).await
    }

    // =========================================================================
    // LISTING REQUESTS
    // =========================================================================

    /// Listing views of every pending request, in submission order.
    pub async fn listing_views(&self) -> Result<Vec<YieldResponse>, EngineError> {
        let requests = self.fetch(self.provider.listings.list()).await?;
        debug!("Building views for {} listing requests", requests.len());

        let views: Vec<Result<Option<YieldResponse>, EngineError>> = stream::iter(requests)
            .map(|request| self.listing_entry(request))
            .buffered(self.config.max_concurrent_fetches)
            .collect()
            .await;

        views.into_iter().filter_map(Result::transpose).collect()
    }

    /// Validate and store a listing request.
    ///
    /// Nothing is stored unless the income terms are valid and the oracle
    /// knows the collection. A collection without a floor price yet is
    /// stored with no listing view.
    pub async fn submit_listing_request(
        &self,
        request: NewListingRequest,
    ) -> Result<ListingSubmission, EngineError> {
        if request.income <= Decimal::ZERO {
            return Err(EngineError::InvalidInput(
                "income must be greater than zero".into(),
            ));
        }
        if request.payment_interval_days == 0 {
            return Err(EngineError::InvalidInput(
                "payment interval must be at least one day".into(),
            ));
        }

        let metadata = self.require_metadata(&request.address).await?;
        let stored = self.fetch(self.provider.listings.add(&request)).await?;
        info!(
            "Listing request {} for {} submitted by user {}",
            stored.id, stored.address, stored.user_id
        );

        let view = match assemble(
            &metadata,
            stored.income,
            stored.payment_interval_days,
            AssembleOptions::new(),
        ) {
            Ok(view) => {
                debug!("Listing request {}: {}", stored.id, view.yield_result());
                Some(view)
            }
            Err(ApriorityError::UndefinedYield { reason }) => {
                debug!("Listing request {} has no view yet: {}", stored.id, reason);
                None
            }
            Err(e) => return Err(e.into()),
        };

        Ok(ListingSubmission {
            request: stored,
            view,
        })
    }

    /// Pending requests submitted by one user.
    pub async fn listing_requests_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ListingRequest>, EngineError> {
        self.fetch(self.provider.listings.list_by_user(user_id)).await
    }

    /// Delete the pending request for a collection.
    pub async fn delete_listing_request(
        &self,
        address: &CollectionAddress,
    ) -> Result<(), EngineError> {
        if self.fetch(self.provider.listings.delete(address)).await? {
            info!("Listing request for {} deleted", address);
            Ok(())
        } else {
            Err(EngineError::NotFound(format!("listing request for {address}")))
        }
    }

    // =========================================================================
    // COMMENTS AND OWNERSHIP
    // =========================================================================

    /// Comments on a tracked collection, in display form.
    pub async fn comments(
        &self,
        address: &CollectionAddress,
    ) -> Result<Vec<CommentView>, EngineError> {
        self.tracked(address).await?;
        let mut comments = self.fetch(self.provider.comments.list(address)).await?;
        if self.config.comments_newest_first {
            comments.reverse();
        }
        Ok(comments.iter().map(Comment::view).collect())
    }

    /// Post a comment on a tracked collection.
    ///
    /// The author's wallet must hold an item of the collection.
    pub async fn add_comment(
        &self,
        address: &CollectionAddress,
        comment: NewComment,
    ) -> Result<Comment, EngineError> {
        if comment.text.trim().is_empty() {
            return Err(EngineError::InvalidInput("comment text is empty".into()));
        }
        let length = comment.text.chars().count();
        if length > self.config.max_comment_length {
            return Err(EngineError::InvalidInput(format!(
                "comment is {} characters, limit is {}",
                length, self.config.max_comment_length
            )));
        }

        self.tracked(address).await?;
        if !self.check_ownership(&comment.user_address, address).await? {
            warn!(
                "Rejected comment on {}: {} holds no item",
                address, comment.user_address
            );
            return Err(EngineError::Unauthorized(format!(
                "{} holds no item of {}",
                comment.user_address, address
            )));
        }

        let stored = self.fetch(self.provider.comments.add(address, &comment)).await?;
        debug!("Comment {} added to {}", stored.id, address);
        Ok(stored)
    }

    /// Returns true if `wallet` holds at least one item of `collection`.
    pub async fn check_ownership(
        &self,
        wallet: &WalletAddress,
        collection: &CollectionAddress,
    ) -> Result<bool, EngineError> {
        self.fetch(self.provider.ownership.owns_item(wallet, collection))
            .await
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Run a collaborator call under the fetch timeout.
    async fn fetch<T>(
        &self,
        call: impl Future<Output = Result<T, TraitError>>,
    ) -> Result<T, EngineError> {
        match timeout(self.config.fetch_timeout(), call).await {
            Ok(result) => result.map_err(|e| {
                if e.is_transient() {
                    warn!("Collaborator call failed: {}", e);
                }
                EngineError::from(e)
            }),
            Err(_) => {
                warn!(
                    "Collaborator call exceeded {}ms",
                    self.config.fetch_timeout_ms
                );
                Err(EngineError::Timeout)
            }
        }
    }

    async fn tracked(&self, address: &CollectionAddress) -> Result<TrackedCollection, EngineError> {
        self.fetch(self.provider.collections.get_collection(address))
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("collection {address}")))
    }

    async fn require_metadata(
        &self,
        address: &CollectionAddress,
    ) -> Result<NftCollection, EngineError> {
        self.fetch(self.provider.metadata.get_metadata(address))
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("metadata of {address}")))
    }

    async fn full_view(
        &self,
        tracked: &TrackedCollection,
        metadata: &NftCollection,
    ) -> Result<YieldResponse, EngineError> {
        let mut options = AssembleOptions::new().with_flags(tracked.flags());
        if self.config.include_payment_history {
            if let Some(history) = self
                .fetch(self.provider.collections.payment_history(&tracked.address))
                .await?
            {
                options = options.with_payment_history(history);
            }
        }
        Ok(assemble(
            metadata,
            tracked.income,
            tracked.payment_interval_days,
            options,
        )?)
    }

    /// Metadata for a list entry; `None` when the oracle does not know the
    /// collection or is unavailable for it.
    async fn list_metadata(
        &self,
        address: &CollectionAddress,
    ) -> Result<Option<NftCollection>, EngineError> {
        match self.fetch(self.provider.metadata.get_metadata(address)).await {
            Ok(Some(metadata)) => Ok(Some(metadata)),
            Ok(None) => {
                warn!("No metadata for {}, skipping", address);
                Ok(None)
            }
            Err(e) if e.is_transient() => {
                warn!("Metadata for {} unavailable, skipping: {}", address, e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// List entry for a tracked collection; `None` when it is skipped.
    async fn tracked_entry(
        &self,
        collection: TrackedCollection,
    ) -> Result<Option<YieldResponse>, EngineError> {
        let Some(metadata) = self.list_metadata(&collection.address).await? else {
            return Ok(None);
        };
        let view = self.full_view(&collection, &metadata).await;
        self.skip_unpriced(&collection.address, view)
    }

    /// List entry for a pending listing request; `None` when it is skipped.
    async fn listing_entry(
        &self,
        request: ListingRequest,
    ) -> Result<Option<YieldResponse>, EngineError> {
        let Some(metadata) = self.list_metadata(&request.address).await? else {
            return Ok(None);
        };
        let view = assemble(
            &metadata,
            request.income,
            request.payment_interval_days,
            AssembleOptions::new(),
        )
        .map_err(EngineError::from);
        self.skip_unpriced(&request.address, view)
    }

    /// Turn an undefined yield into a skipped entry when configured to.
    fn skip_unpriced(
        &self,
        address: &CollectionAddress,
        view: Result<YieldResponse, EngineError>,
    ) -> Result<Option<YieldResponse>, EngineError> {
        match view {
            Ok(view) => Ok(Some(view)),
            Err(EngineError::Yield(ApriorityError::UndefinedYield { reason }))
                if self.config.skip_unpriced_collections =>
            {
                warn!("Skipping {}: {}", address, reason);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
