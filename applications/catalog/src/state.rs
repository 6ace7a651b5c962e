/// Shared catalog state
use crate::{
    config::CatalogConfig,
    services::{
        LocalFileStore, PlaylistService, StoreTrackAggregator, TrackDeletionCoordinator,
        TrackService,
    },
};
use setlist_core::{storage::DocumentStore, traits::FileStore};
use setlist_storage::{PlaylistStore, SqliteDocumentStore, TrackStore};
use std::sync::Arc;

/// Fully wired catalog services
///
/// Every collaborator is passed in; nothing is looked up globally.
#[derive(Clone)]
pub struct CatalogState {
    pub tracks: TrackService,
    pub playlists: PlaylistService,
}

impl CatalogState {
    pub fn new(documents: Arc<dyn DocumentStore>, files: Arc<dyn FileStore>) -> Self {
        let track_store = TrackStore::new(Arc::clone(&documents), files);
        let playlist_store = PlaylistStore::new(documents);

        let aggregator = Arc::new(StoreTrackAggregator::new(track_store.clone()));
        let deletion = TrackDeletionCoordinator::new(track_store.clone());

        Self {
            tracks: TrackService::new(track_store, deletion),
            playlists: PlaylistService::new(playlist_store, aggregator),
        }
    }

    /// Open the configured database and file directory
    pub async fn connect(config: &CatalogConfig) -> anyhow::Result<Self> {
        let pool = setlist_storage::create_pool(
            &config.storage.database_url,
            config.storage.max_connections,
        )
        .await?;
        setlist_storage::run_migrations(&pool).await?;
        tracing::info!("Database connected");

        let files = LocalFileStore::new(config.storage.file_storage_path.clone());
        files.initialize().await?;
        tracing::info!("File storage initialized at {:?}", files.base_path());

        Ok(Self::new(
            Arc::new(SqliteDocumentStore::new(pool)),
            Arc::new(files),
        ))
    }
}
