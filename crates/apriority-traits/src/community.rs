//! User-submitted listing requests and comments.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TraitError;
use crate::ids::{CollectionAddress, UserId, WalletAddress};

/// Display format of comment timestamps.
pub const COMMENT_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

// =============================================================================
// LISTING REQUESTS
// =============================================================================

/// A request to list a collection, as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewListingRequest {
    /// Submitting user
    pub user_id: UserId,
    /// Collection to list
    pub address: CollectionAddress,
    /// Claimed income per NFT every interval
    pub income: Decimal,
    /// Claimed days between payments
    pub payment_interval_days: u32,
}

/// A stored listing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRequest {
    /// Store-assigned identifier
    pub id: u64,
    /// Submitting user
    pub user_id: UserId,
    /// Collection to list
    pub address: CollectionAddress,
    /// Claimed income per NFT every interval
    pub income: Decimal,
    /// Claimed days between payments
    pub payment_interval_days: u32,
    /// Submission time
    pub created_at: DateTime<Utc>,
}

impl ListingRequest {
    /// Build a stored request from a submission.
    pub fn from_new(id: u64, request: &NewListingRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: request.user_id,
            address: request.address.clone(),
            income: request.income,
            payment_interval_days: request.payment_interval_days,
            created_at,
        }
    }
}

/// Trait for listing request storage.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Store a new request and return it with its identifier.
    async fn add(&self, request: &NewListingRequest) -> Result<ListingRequest, TraitError>;

    /// All pending requests in submission order.
    async fn list(&self) -> Result<Vec<ListingRequest>, TraitError>;

    /// Pending requests submitted by one user.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<ListingRequest>, TraitError>;

    /// Delete the first pending request for a collection. Returns false if none existed.
    async fn delete(&self, address: &CollectionAddress) -> Result<bool, TraitError>;
}

// =============================================================================
// COMMENTS
// =============================================================================

/// A comment as submitted by a holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    /// Display name of the author
    pub name: String,
    /// Wallet used to prove ownership
    pub user_address: WalletAddress,
    /// Whether the author recommends the collection
    pub like: bool,
    /// Comment body
    pub text: String,
}

/// A stored comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Store-assigned identifier
    pub id: u64,
    /// Commented collection
    pub address: CollectionAddress,
    /// Display name of the author
    pub name: String,
    /// Comment body
    pub text: String,
    /// Whether the author recommends the collection
    pub like: bool,
    /// Submission time
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Build a stored comment from a submission.
    pub fn from_new(
        id: u64,
        address: &CollectionAddress,
        comment: &NewComment,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            address: address.clone(),
            name: comment.name.clone(),
            text: comment.text.clone(),
            like: comment.like,
            created_at,
        }
    }

    /// Submission time formatted for display.
    pub fn formatted_time(&self) -> String {
        self.created_at.format(COMMENT_TIME_FORMAT).to_string()
    }

    /// Display form of this comment.
    pub fn view(&self) -> CommentView {
        CommentView {
            id: self.id,
            name: self.name.clone(),
            text: self.text.clone(),
            like: self.like,
            time: self.formatted_time(),
        }
    }
}

/// A comment as shown on a collection page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    /// Store-assigned identifier
    pub id: u64,
    /// Display name of the author
    pub name: String,
    /// Comment body
    pub text: String,
    /// Whether the author recommends the collection
    pub like: bool,
    /// Submission time as `dd.mm.YYYY HH:MM:SS`
    pub time: String,
}

/// Trait for comment storage.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Store a comment on a collection.
    async fn add(
        &self,
        address: &CollectionAddress,
        comment: &NewComment,
    ) -> Result<Comment, TraitError>;

    /// Comments on a collection, oldest first.
    async fn list(&self, address: &CollectionAddress) -> Result<Vec<Comment>, TraitError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_comment_time_format() {
        let comment = Comment::from_new(
            1,
            &CollectionAddress::new("EQC-punks"),
            &NewComment {
                name: "alice".into(),
                user_address: WalletAddress::new("UQ-alice"),
                like: true,
                text: "steady payouts".into(),
            },
            Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
        );
        assert_eq!(comment.formatted_time(), "09.03.2024 14:05:07");

        let view = comment.view();
        assert_eq!(view.time, "09.03.2024 14:05:07");
        assert_eq!(view.text, "steady payouts");
    }

    #[test]
    fn test_listing_request_from_new() {
        let submitted = NewListingRequest {
            user_id: 42,
            address: CollectionAddress::new("EQB-apes"),
            income: dec!(0.75),
            payment_interval_days: 14,
        };
        let now = Utc::now();
        let stored = ListingRequest::from_new(7, &submitted, now);
        assert_eq!(stored.id, 7);
        assert_eq!(stored.user_id, 42);
        assert_eq!(stored.address, submitted.address);
        assert_eq!(stored.created_at, now);
    }
}
