//! Identifier types used across collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// On-chain address of an NFT collection.
///
/// Surrounding whitespace is stripped on construction so that addresses
/// pasted into requests match stored ones.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CollectionAddress(pub String);

impl CollectionAddress {
    /// Create a new collection address.
    pub fn new(address: impl AsRef<str>) -> Self {
        Self(address.as_ref().trim().to_string())
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the address is blank.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CollectionAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CollectionAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CollectionAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Address of a user wallet.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct WalletAddress(pub String);

impl WalletAddress {
    /// Create a new wallet address.
    pub fn new(address: impl AsRef<str>) -> Self {
        Self(address.as_ref().trim().to_string())
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WalletAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identifier of a user submitting listing requests.
pub type UserId = i64;
