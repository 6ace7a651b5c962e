/// Playlist use-cases
use super::{
    aggregation::{order_by_references, TrackAggregator},
    consistency::PlaylistConsistencyGuard,
    projection::project_search_results,
};
use setlist_core::{
    error::{CatalogError, Result},
    types::{MusicTrack, Playlist, PlaylistFields, PlaylistFilter, PlaylistWithTracks, UserId},
    validation::{validate_document_id, validate_track_ids},
};
use setlist_storage::PlaylistStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct PlaylistService {
    playlists: PlaylistStore,
    aggregator: Arc<dyn TrackAggregator>,
    guard: PlaylistConsistencyGuard,
}

impl PlaylistService {
    pub fn new(playlists: PlaylistStore, aggregator: Arc<dyn TrackAggregator>) -> Self {
        let guard = PlaylistConsistencyGuard::new(Arc::clone(&aggregator));
        Self {
            playlists,
            aggregator,
            guard,
        }
    }

    /// Create a playlist whose every reference resolves
    pub async fn create(
        &self,
        fields: PlaylistFields,
        created_by: UserId,
    ) -> Result<PlaylistWithTracks> {
        if created_by.is_blank() {
            return Err(CatalogError::invalid_request("creator identity is required"));
        }
        let (fields, tracks) = self.checked(fields).await?;

        let playlist = self.playlists.create(fields, created_by).await?;
        tracing::info!(
            "Created playlist {} with {} tracks",
            playlist.id,
            playlist.track_ids.len()
        );

        Ok(with_tracks(playlist, tracks))
    }

    /// Fetch a playlist with the tracks that still exist
    ///
    /// References are not re-checked here; tracks deleted since the last write
    /// are simply missing from the result.
    pub async fn get(&self, id: &str) -> Result<PlaylistWithTracks> {
        let id = validate_document_id(id, "playlist")?;
        let playlist = self.playlists.get(id).await?;
        let tracks = self.aggregator.aggregate(&playlist.track_ids).await?;

        Ok(with_tracks(playlist, tracks))
    }

    /// Replace a playlist's fields and reference list
    pub async fn update(&self, id: &str, fields: PlaylistFields) -> Result<PlaylistWithTracks> {
        let id = validate_document_id(id, "playlist")?;
        let (fields, tracks) = self.checked(fields).await?;

        let playlist = self.playlists.update(id, fields).await?;
        tracing::info!("Updated playlist {}", playlist.id);

        Ok(with_tracks(playlist, tracks))
    }

    /// Delete a playlist; referenced tracks are left alone
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = validate_document_id(id, "playlist")?;
        self.playlists.delete(id).await?;
        tracing::info!("Deleted playlist {}", id);
        Ok(())
    }

    pub async fn search(&self, filter: &PlaylistFilter) -> Result<Vec<Playlist>> {
        let playlists = self.playlists.search(filter).await?;
        Ok(project_search_results(playlists))
    }

    /// Validate the payload and run it through the consistency guard
    async fn checked(
        &self,
        mut fields: PlaylistFields,
    ) -> Result<(PlaylistFields, Vec<MusicTrack>)> {
        fields.validate()?;
        if let Some(track_ids) = &fields.track_ids {
            validate_track_ids(track_ids)?;
        }

        let resolved = self.guard.check(fields.track_ids.take()).await?;
        fields.track_ids = Some(resolved.track_ids);
        Ok((fields, resolved.tracks))
    }
}

fn with_tracks(playlist: Playlist, tracks: Vec<MusicTrack>) -> PlaylistWithTracks {
    let tracks = order_by_references(&playlist.track_ids, tracks);
    PlaylistWithTracks::new(playlist, tracks)
}
