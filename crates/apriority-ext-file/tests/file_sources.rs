//! Integration tests for the JSON-directory and in-memory collaborators.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use rust_decimal_macros::dec;

use apriority_core::types::NftCollection;
use apriority_ext_file::*;
use apriority_traits::collections::{CollectionMetadataSource, CollectionStore, OwnershipVerifier};
use apriority_traits::community::{CommentStore, ListingStore, NewComment, NewListingRequest};
use apriority_traits::error::TraitError;
use apriority_traits::ids::{CollectionAddress, WalletAddress};

// =============================================================================
// FIXTURES
// =============================================================================

fn write(root: &Path, dir: &str, name: &str, content: &str) {
    let dir = root.join(dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

fn seed_repository(root: &Path) {
    write(
        root,
        "collections",
        "EQC-punks.json",
        r#"{"address":"EQC-punks","income":10,"payment_interval_days":30,"regular_payments":true,"unsafe":false}"#,
    );
    write(
        root,
        "collections",
        "EQB-apes.json",
        r#"{"address":"EQB-apes","income":0.5,"payment_interval_days":7}"#,
    );
    write(root, "collections", "README.md", "not a document");
    write(
        root,
        "payments",
        "EQC-punks.json",
        r#"{"history":[{"date":"2024-01-01","amount":9.5},{"date":"2024-01-31","amount":10.5}]}"#,
    );
}

fn comment(wallet: &str, text: &str) -> NewComment {
    NewComment {
        name: "holder".into(),
        user_address: WalletAddress::new(wallet),
        like: true,
        text: text.into(),
    }
}

// =============================================================================
// JSON COLLECTION STORE
// =============================================================================

#[tokio::test]
async fn test_json_store_loads_documents() {
    let dir = tempfile::tempdir().unwrap();
    seed_repository(dir.path());

    let store = JsonCollectionStore::new(dir.path()).unwrap();
    let collections = store.list_collections().await.unwrap();

    assert_eq!(collections.len(), 2);
    // sorted by address
    assert_eq!(collections[0].address.as_str(), "EQB-apes");
    assert_eq!(collections[1].income, dec!(10));
    assert!(collections[1].regular_payments);

    let punks = CollectionAddress::new("EQC-punks");
    let history = store.payment_history(&punks).await.unwrap().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history.mean_amount(), Some(dec!(10)));

    let apes = CollectionAddress::new("EQB-apes");
    assert!(store.payment_history(&apes).await.unwrap().is_none());
}

#[tokio::test]
async fn test_json_store_missing_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonCollectionStore::new(dir.path().join("absent")).unwrap();
    assert!(store.list_collections().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_json_store_reload_picks_up_changes() {
    let dir = tempfile::tempdir().unwrap();
    seed_repository(dir.path());
    let store = JsonCollectionStore::new(dir.path()).unwrap();

    write(
        dir.path(),
        "collections",
        "EQD-frogs.json",
        r#"{"address":"EQD-frogs","income":1,"payment_interval_days":1}"#,
    );
    assert_eq!(store.reload().unwrap(), 3);

    let frogs = CollectionAddress::new("EQD-frogs");
    assert!(store.get_collection(&frogs).await.unwrap().is_some());
}

#[tokio::test]
async fn test_json_store_malformed_document_keeps_previous_state() {
    let dir = tempfile::tempdir().unwrap();
    seed_repository(dir.path());
    let store = JsonCollectionStore::new(dir.path()).unwrap();

    write(dir.path(), "collections", "broken.json", "{ not json");
    let err = store.reload().unwrap_err();
    assert!(matches!(err, TraitError::ParseError(ref msg) if msg.contains("broken.json")));

    assert_eq!(store.list_collections().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_json_store_reload_publishes_new_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    seed_repository(dir.path());
    let store = JsonCollectionStore::new(dir.path()).unwrap();
    let before = store.snapshot();

    fs::remove_file(dir.path().join("collections").join("EQB-apes.json")).unwrap();
    assert_eq!(store.reload().unwrap(), 1);

    // handles taken earlier keep the contents they were published with
    assert_eq!(before.len(), 2);
    assert_eq!(store.snapshot().len(), 1);
    assert!(store
        .get_collection(&CollectionAddress::new("EQB-apes"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_json_store_readers_never_see_partial_reload() {
    let dir = tempfile::tempdir().unwrap();
    seed_repository(dir.path());
    let store = Arc::new(JsonCollectionStore::new(dir.path()).unwrap());

    let reloader = {
        let store = store.clone();
        tokio::task::spawn_blocking(move || {
            for _ in 0..200 {
                store.reload().unwrap();
            }
        })
    };

    let punks = CollectionAddress::new("EQC-punks");
    for _ in 0..500 {
        assert!(store.get_collection(&punks).await.unwrap().is_some());
        assert_eq!(store.list_collections().await.unwrap().len(), 2);
        tokio::task::yield_now().await;
    }
    reloader.await.unwrap();
}

// =============================================================================
// ORACLE AND OWNERSHIP
// =============================================================================

#[tokio::test]
async fn test_static_metadata_source() {
    let source = StaticMetadataSource::new();
    source.insert(NftCollection::new("EQC-punks", "TON Punks").with_floor_price(dec!(100)));

    let found = source
        .get_metadata(&CollectionAddress::new(" EQC-punks "))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "TON Punks");

    let empty = EmptyMetadataSource;
    assert!(empty
        .get_metadata(&CollectionAddress::new("EQC-punks"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_static_ownership() {
    let verifier = StaticOwnershipVerifier::new();
    let wallet = WalletAddress::new("UQ-alice");
    let punks = CollectionAddress::new("EQC-punks");

    assert!(!verifier.owns_item(&wallet, &punks).await.unwrap());
    verifier.grant(wallet.clone(), punks.clone());
    assert!(verifier.owns_item(&wallet, &punks).await.unwrap());
    verifier.revoke(&wallet, &punks);
    assert!(!verifier.owns_item(&wallet, &punks).await.unwrap());
}

// =============================================================================
// LISTINGS AND COMMENTS
// =============================================================================

#[tokio::test]
async fn test_listing_store_lifecycle() {
    let store = InMemoryListingStore::new();
    let apes = CollectionAddress::new("EQB-apes");

    let first = store
        .add(&NewListingRequest {
            user_id: 1,
            address: apes.clone(),
            income: dec!(0.5),
            payment_interval_days: 7,
        })
        .await
        .unwrap();
    let second = store
        .add(&NewListingRequest {
            user_id: 2,
            address: CollectionAddress::new("EQD-frogs"),
            income: dec!(1),
            payment_interval_days: 1,
        })
        .await
        .unwrap();

    assert_eq!((first.id, second.id), (1, 2));
    assert_eq!(store.list().await.unwrap().len(), 2);
    assert_eq!(store.list_by_user(2).await.unwrap(), vec![second.clone()]);
    assert_eq!(store.list_by_user(1).await.unwrap(), vec![first]);

    assert!(store.delete(&apes).await.unwrap());
    assert!(!store.delete(&apes).await.unwrap());
    assert_eq!(store.list().await.unwrap(), vec![second]);
}

#[tokio::test]
async fn test_comment_store_filters_by_collection() {
    let store = InMemoryCommentStore::new();
    let punks = CollectionAddress::new("EQC-punks");
    let apes = CollectionAddress::new("EQB-apes");

    store.add(&punks, &comment("UQ-a", "first")).await.unwrap();
    store.add(&apes, &comment("UQ-b", "other")).await.unwrap();
    store.add(&punks, &comment("UQ-c", "second")).await.unwrap();

    let texts: Vec<_> = store
        .list(&punks)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.text)
        .collect();
    assert_eq!(texts, vec!["first", "second"]);
}

#[tokio::test]
async fn test_file_provider_wires_collaborators() {
    let dir = tempfile::tempdir().unwrap();
    seed_repository(dir.path());
    let backends = MemoryBackends::new();

    let provider = create_file_provider(
        dir.path(),
        backends.metadata.clone(),
        backends.ownership.clone(),
    )
    .unwrap();

    assert_eq!(provider.collections.list_collections().await.unwrap().len(), 2);
    assert!(provider.listings.list().await.unwrap().is_empty());
}
