/// Track use-cases
use super::track_deletion::{DeletionReport, TrackDeletionCoordinator};
use setlist_core::{
    error::{CatalogError, Result},
    types::{MusicTrack, TrackFields, TrackFilter},
    validation::validate_document_id,
};
use setlist_storage::TrackStore;

#[derive(Clone)]
pub struct TrackService {
    tracks: TrackStore,
    deletion: TrackDeletionCoordinator,
}

impl TrackService {
    pub fn new(tracks: TrackStore, deletion: TrackDeletionCoordinator) -> Self {
        Self { tracks, deletion }
    }

    pub async fn create(&self, fields: TrackFields) -> Result<MusicTrack> {
        fields.validate()?;
        let track = self.tracks.create(fields).await?;
        tracing::info!("Created track {} ({})", track.id, track.title);
        Ok(track)
    }

    /// Store an audio file and return the link to put on a track
    pub async fn upload(&self, bytes: &[u8], name: &str) -> Result<String> {
        if bytes.is_empty() {
            return Err(CatalogError::invalid_request("uploaded file is empty"));
        }
        if name.trim().is_empty() {
            return Err(CatalogError::invalid_request("uploaded file has no name"));
        }

        let link = self.tracks.upload(bytes, name).await?;
        tracing::info!("Uploaded {} ({} bytes) as {}", name, bytes.len(), link);
        Ok(link)
    }

    pub async fn get(&self, id: &str) -> Result<MusicTrack> {
        let id = validate_document_id(id, "track")?;
        self.tracks.get(id).await
    }

    pub async fn update(&self, id: &str, fields: TrackFields) -> Result<MusicTrack> {
        let id = validate_document_id(id, "track")?;
        fields.validate()?;
        self.tracks.update(id, fields).await
    }

    pub async fn delete(&self, id: &str) -> Result<DeletionReport> {
        let id = validate_document_id(id, "track")?;
        self.deletion.delete(id).await
    }

    pub async fn search(&self, filter: &TrackFilter) -> Result<Vec<MusicTrack>> {
        self.tracks.search(filter).await
    }
}
