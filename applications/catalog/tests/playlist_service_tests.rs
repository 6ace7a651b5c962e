//! Integration tests for playlist use-cases
//!
//! Covers the consistency guard on writes, aggregation on reads, search
//! projection and identifier validation ahead of store I/O.

mod common;

use common::{fixtures::*, TestCatalog};
use setlist_core::{
    storage::Collection,
    types::{DocumentId, PlaylistFilter, UserId},
    ErrorKind,
};

#[tokio::test]
async fn test_create_resolves_every_reference() {
    let catalog = TestCatalog::new();
    let a = catalog.track("Lo-Fi Dreams").await;
    let b = catalog.track("Night Drive").await;

    let created = catalog
        .state
        .playlists
        .create(
            playlist_fields("Chill", Some(ids_of(&[&b, &a]))),
            UserId::new("user-1"),
        )
        .await
        .unwrap();

    assert_eq!(created.tracks.len(), 2);
    assert_eq!(created.created_by.as_str(), "user-1");
    // Tracks come back in playlist order
    assert_eq!(created.tracks[0].id, b.id);
    assert_eq!(created.tracks[1].id, a.id);
}

#[tokio::test]
async fn test_create_without_tracks() {
    let catalog = TestCatalog::new();

    let created = catalog
        .state
        .playlists
        .create(playlist_fields("Empty", None), UserId::new("user-1"))
        .await
        .unwrap();

    assert!(created.tracks.is_empty());
    let fetched = catalog
        .state
        .playlists
        .get(&created.id.to_string())
        .await
        .unwrap();
    assert!(fetched.tracks.is_empty());
}

#[tokio::test]
async fn test_dangling_reference_rejects_and_persists_nothing() {
    let catalog = TestCatalog::new();
    let a = catalog.track("Lo-Fi Dreams").await;

    let mut refs = ids_of(&[&a]);
    refs.push(DocumentId::generate().to_string());

    let err = catalog
        .state
        .playlists
        .create(playlist_fields("Broken", Some(refs)), UserId::new("user-1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ReferencedTrackNotFound);
    assert!(catalog.documents.inner.is_empty(Collection::Playlists));
}

#[tokio::test]
async fn test_duplicate_reference_is_rejected() {
    let catalog = TestCatalog::new();
    let a = catalog.track("Lo-Fi Dreams").await;

    let err = catalog
        .state
        .playlists
        .create(
            playlist_fields("Twice", Some(ids_of(&[&a, &a]))),
            UserId::new("user-1"),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ReferencedTrackNotFound);
    assert!(catalog.documents.inner.is_empty(Collection::Playlists));
}

#[tokio::test]
async fn test_blank_creator_is_rejected() {
    let catalog = TestCatalog::new();

    let err = catalog
        .state
        .playlists
        .create(playlist_fields("Anon", None), UserId::new("  "))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert_eq!(catalog.documents.calls(), 0);
}

#[tokio::test]
async fn test_malformed_reference_is_rejected_before_io() {
    let catalog = TestCatalog::new();

    let err = catalog
        .state
        .playlists
        .create(
            playlist_fields("Bad", Some(vec!["not-an-id".to_string()])),
            UserId::new("user-1"),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert_eq!(catalog.documents.calls(), 0);
}

#[tokio::test]
async fn test_invalid_playlist_ids_are_rejected_before_io() {
    let catalog = TestCatalog::new();
    let playlists = &catalog.state.playlists;

    for bad in ["", "123", "zzzzzzzzzzzzzzzzzzzzzzzz", "65f1c0ffee0000000000abcd0"] {
        assert_eq!(playlists.get(bad).await.unwrap_err().kind(), ErrorKind::InvalidRequest);
        assert_eq!(
            playlists.delete(bad).await.unwrap_err().kind(),
            ErrorKind::InvalidRequest
        );
        assert_eq!(
            playlists
                .update(bad, playlist_fields("X", None))
                .await
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidRequest
        );
    }

    assert_eq!(catalog.documents.calls(), 0);
}

#[tokio::test]
async fn test_get_missing_playlist() {
    let catalog = TestCatalog::new();

    let err = catalog
        .state
        .playlists
        .get(&DocumentId::generate().to_string())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_update_keeps_creator_and_checks_references() {
    let catalog = TestCatalog::new();
    let a = catalog.track("Lo-Fi Dreams").await;
    let b = catalog.track("Night Drive").await;

    let created = catalog
        .state
        .playlists
        .create(playlist_fields("Chill", Some(ids_of(&[&a]))), UserId::new("owner"))
        .await
        .unwrap();
    let id = created.id.to_string();

    let updated = catalog
        .state
        .playlists
        .update(&id, playlist_fields("Chill v2", Some(ids_of(&[&a, &b]))))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_by.as_str(), "owner");
    assert_eq!(updated.title, "Chill v2");
    assert_eq!(updated.tracks.len(), 2);

    // A dangling reference leaves the stored playlist untouched
    let err = catalog
        .state
        .playlists
        .update(
            &id,
            playlist_fields("Chill v3", Some(vec![DocumentId::generate().to_string()])),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ReferencedTrackNotFound);

    let fetched = catalog.state.playlists.get(&id).await.unwrap();
    assert_eq!(fetched.title, "Chill v2");
    assert_eq!(fetched.tracks.len(), 2);
}

#[tokio::test]
async fn test_update_missing_playlist() {
    let catalog = TestCatalog::new();

    let err = catalog
        .state
        .playlists
        .update(
            &DocumentId::generate().to_string(),
            playlist_fields("Ghost", None),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_delete_leaves_tracks_intact() {
    let catalog = TestCatalog::new();
    let a = catalog.track("Lo-Fi Dreams").await;

    let created = catalog
        .state
        .playlists
        .create(playlist_fields("Chill", Some(ids_of(&[&a]))), UserId::new("u"))
        .await
        .unwrap();
    let id = created.id.to_string();

    catalog.state.playlists.delete(&id).await.unwrap();

    assert_eq!(
        catalog.state.playlists.get(&id).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        catalog.state.playlists.delete(&id).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(catalog.state.tracks.get(&a.id.to_string()).await.unwrap(), a);
}

#[tokio::test]
async fn test_search_clears_reference_lists() {
    let catalog = TestCatalog::new();
    let a = catalog.track("Lo-Fi Dreams").await;

    for title in ["Chill", "Chill Evening", "Workout"] {
        catalog
            .state
            .playlists
            .create(playlist_fields(title, Some(ids_of(&[&a]))), UserId::new("u"))
            .await
            .unwrap();
    }

    let filter = PlaylistFilter {
        title: Some("CHILL".to_string()),
        ..Default::default()
    };
    let first = catalog.state.playlists.search(&filter).await.unwrap();
    assert_eq!(first.len(), 2);
    assert!(first.iter().all(|p| p.track_ids.is_empty()));

    // Repeating the search gives the same result
    let second = catalog.state.playlists.search(&filter).await.unwrap();
    assert_eq!(first, second);

    // Unfiltered search, twice
    let all = catalog
        .state
        .playlists
        .search(&PlaylistFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|p| p.track_ids.is_empty()));
    let again = catalog
        .state
        .playlists
        .search(&PlaylistFilter::default())
        .await
        .unwrap();
    assert_eq!(all, again);
}

#[tokio::test]
async fn test_lo_fi_dreams_scenario() {
    let catalog = TestCatalog::new();
    let dreams = catalog.track("Lo-Fi Dreams").await;
    let drive = catalog.track("Night Drive").await;

    let created = catalog
        .state
        .playlists
        .create(
            playlist_fields("Lo-Fi Dreams", Some(ids_of(&[&dreams, &drive]))),
            UserId::new("listener"),
        )
        .await
        .unwrap();
    let id = created.id.to_string();
    assert_eq!(created.tracks.len(), 2);

    // Deleting a referenced track does not touch the playlist
    let report = catalog
        .state
        .tracks
        .delete(&drive.id.to_string())
        .await
        .unwrap();
    assert!(report.is_clean());

    // Reads silently drop the dangling reference
    let fetched = catalog.state.playlists.get(&id).await.unwrap();
    assert_eq!(fetched.tracks.len(), 1);
    assert_eq!(fetched.tracks[0].id, dreams.id);

    // Writing the stale list back is rejected
    let err = catalog
        .state
        .playlists
        .update(
            &id,
            playlist_fields("Lo-Fi Dreams", Some(ids_of(&[&dreams, &drive]))),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ReferencedTrackNotFound);

    // Dropping it succeeds
    let repaired = catalog
        .state
        .playlists
        .update(&id, playlist_fields("Lo-Fi Dreams", Some(ids_of(&[&dreams]))))
        .await
        .unwrap();
    assert_eq!(repaired.tracks.len(), 1);
}
