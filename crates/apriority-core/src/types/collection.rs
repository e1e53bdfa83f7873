//! NFT collection metadata as reported by the price oracle.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Collection metadata supplied by the price oracle.
///
/// The floor price is absent for collections that have not traded yet.
///
/// # Example
///
/// ```rust
/// use apriority_core::types::NftCollection;
/// use rust_decimal_macros::dec;
///
/// let collection = NftCollection::new("EQC-punks", "TON Punks").with_floor_price(dec!(42.5));
/// assert!(collection.has_floor());
/// assert_eq!(collection.floor_or_zero(), dec!(42.5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftCollection {
    /// On-chain collection address
    pub address: String,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Avatar image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Cover image URL
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Social links published by the collection
    #[serde(default)]
    pub social_links: Vec<String>,
    /// Whether the marketplace verified the collection
    #[serde(default)]
    pub verified: bool,
    /// Approximate number of items
    #[serde(default)]
    pub item_count: u64,
    /// Approximate number of holders
    #[serde(default)]
    pub holder_count: u64,
    /// Lowest current market price, if any
    #[serde(default)]
    pub floor_price: Option<Decimal>,
}

impl NftCollection {
    /// Creates collection metadata with only an address and a name.
    #[must_use]
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            description: String::new(),
            image: None,
            cover_image: None,
            social_links: Vec::new(),
            verified: false,
            item_count: 0,
            holder_count: 0,
            floor_price: None,
        }
    }

    /// Sets the floor price.
    #[must_use]
    pub fn with_floor_price(mut self, floor_price: Decimal) -> Self {
        self.floor_price = Some(floor_price);
        self
    }

    /// Sets the item and holder counts.
    #[must_use]
    pub fn with_counts(mut self, item_count: u64, holder_count: u64) -> Self {
        self.item_count = item_count;
        self.holder_count = holder_count;
        self
    }

    /// Marks the collection as verified.
    #[must_use]
    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    /// Returns true if the oracle reported a positive floor price.
    #[must_use]
    pub fn has_floor(&self) -> bool {
        self.floor_price.is_some_and(|f| f > Decimal::ZERO)
    }

    /// Returns the floor price, treating an absent floor as zero.
    #[must_use]
    pub fn floor_or_zero(&self) -> Decimal {
        self.floor_price.unwrap_or(Decimal::ZERO)
    }
}

/// Curated risk flags attached to a tracked collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionFlags {
    /// Income is paid out on a regular schedule
    pub regular_payments: bool,
    /// Collection has been marked as risky
    #[serde(rename = "unsafe")]
    pub is_unsafe: bool,
}

impl CollectionFlags {
    /// Creates a new set of flags.
    #[must_use]
    pub fn new(regular_payments: bool, is_unsafe: bool) -> Self {
        Self {
            regular_payments,
            is_unsafe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_floor_handling() {
        let unpriced = NftCollection::new("EQA", "Fresh");
        assert!(!unpriced.has_floor());
        assert_eq!(unpriced.floor_or_zero(), Decimal::ZERO);

        let zero = NftCollection::new("EQB", "Zero").with_floor_price(Decimal::ZERO);
        assert!(!zero.has_floor());

        let priced = NftCollection::new("EQC", "Priced").with_floor_price(dec!(12.5));
        assert!(priced.has_floor());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{"address":"EQA","name":"Minimal"}"#;
        let parsed: NftCollection = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, NftCollection::new("EQA", "Minimal"));
    }

    #[test]
    fn test_flags_serialize_unsafe_key() {
        let flags = CollectionFlags::new(true, false);
        let json = serde_json::to_value(flags).unwrap();
        assert_eq!(json["regular_payments"], true);
        assert_eq!(json["unsafe"], false);
        assert!(json.get("is_unsafe").is_none());
    }
}
