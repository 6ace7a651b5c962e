use crate::codec::{from_document, logged, to_document, to_field_map};
use setlist_core::{
    error::{CatalogError, Result},
    storage::{Collection, DocumentStore, Filter},
    traits::FileStore,
    types::{DocumentId, MusicTrack, TrackFields, TrackFilter},
};
use std::sync::Arc;

const ENTITY: &str = "Track";

/// File backend failures always surface as Storage errors
fn as_storage(err: CatalogError) -> CatalogError {
    match err {
        CatalogError::Storage(_) => err,
        other => CatalogError::storage(other.to_string()),
    }
}

/// Track collection adapter
///
/// Owns the link between a track record and its stored file: uploads go
/// through here, and so does removal of the file once a record is deleted.
#[derive(Clone)]
pub struct TrackStore {
    documents: Arc<dyn DocumentStore>,
    files: Arc<dyn FileStore>,
}

impl TrackStore {
    pub fn new(documents: Arc<dyn DocumentStore>, files: Arc<dyn FileStore>) -> Self {
        Self { documents, files }
    }

    /// Insert a new track under a fresh identifier
    pub async fn create(&self, fields: TrackFields) -> Result<MusicTrack> {
        let track = MusicTrack::from_fields(DocumentId::generate(), fields);

        self.documents
            .insert_one(Collection::Tracks, track.id, to_document(&track)?)
            .await
            .map_err(logged("insert track"))?;

        tracing::debug!("Created track {}", track.id);
        self.get(track.id).await
    }

    /// Store an audio file, returning its link
    pub async fn upload(&self, bytes: &[u8], name: &str) -> Result<String> {
        self.files.save(bytes, name).await.map_err(|e| {
            tracing::error!("Failed to store file {}: {}", name, e);
            as_storage(e)
        })
    }

    /// Get a track by ID
    pub async fn get(&self, id: DocumentId) -> Result<MusicTrack> {
        let document = self
            .documents
            .find_by_id(Collection::Tracks, id)
            .await
            .map_err(logged("find track"))?
            .ok_or_else(|| CatalogError::not_found(ENTITY, id.to_string()))?;

        from_document(document)
    }

    /// Replace every field of a track
    pub async fn update(&self, id: DocumentId, fields: TrackFields) -> Result<MusicTrack> {
        let matched = self
            .documents
            .update_by_id(Collection::Tracks, id, to_field_map(&fields)?)
            .await
            .map_err(logged("update track"))?;

        if !matched {
            return Err(CatalogError::not_found(ENTITY, id.to_string()));
        }
        self.get(id).await
    }

    /// Delete the track record only; the backing file is left alone
    pub async fn delete_record(&self, id: DocumentId) -> Result<()> {
        let deleted = self
            .documents
            .delete_by_id(Collection::Tracks, id)
            .await
            .map_err(logged("delete track"))?;

        if deleted {
            Ok(())
        } else {
            Err(CatalogError::not_found(ENTITY, id.to_string()))
        }
    }

    /// Remove the stored file behind `link`
    pub async fn delete_file(&self, link: &str) -> Result<()> {
        self.files.delete(link).await.map_err(as_storage)
    }

    /// Search tracks; every set field is a case-insensitive substring match
    pub async fn search(&self, filter: &TrackFilter) -> Result<Vec<MusicTrack>> {
        let filter = Filter::new()
            .contains_opt("title", filter.title.as_deref())
            .contains_opt("artist", filter.artist.as_deref())
            .contains_opt("album", filter.album.as_deref())
            .contains_opt("genre", filter.genre.as_deref());

        self.documents
            .find(Collection::Tracks, &filter)
            .await
            .map_err(logged("search tracks"))?
            .into_iter()
            .map(from_document)
            .collect()
    }

    /// Bulk fetch in one query
    ///
    /// Missing identifiers are skipped and duplicates collapse, so the result
    /// can be shorter than `ids`. Order is not tied to `ids`.
    pub async fn find_by_ids(&self, ids: &[DocumentId]) -> Result<Vec<MusicTrack>> {
        self.documents
            .find_by_ids(Collection::Tracks, ids)
            .await
            .map_err(logged("bulk fetch tracks"))?
            .into_iter()
            .map(from_document)
            .collect()
    }
}
