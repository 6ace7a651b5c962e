use crate::codec::{from_document, logged, to_document, to_field_map};
use serde::Serialize;
use setlist_core::{
    error::{CatalogError, Result},
    storage::{Collection, DocumentStore, Filter},
    types::{DocumentId, Playlist, PlaylistFields, PlaylistFilter, UserId},
};
use std::sync::Arc;

const ENTITY: &str = "Playlist";

/// Fields a playlist update may touch; `id` and `created_by` are immutable
#[derive(Serialize)]
struct PlaylistUpdate<'a> {
    title: &'a str,
    description: &'a str,
    genre: &'a str,
    track_ids: &'a [String],
}

/// Playlist collection adapter
///
/// Stores reference lists exactly as given. No joins and no reference checks
/// happen here.
#[derive(Clone)]
pub struct PlaylistStore {
    documents: Arc<dyn DocumentStore>,
}

impl PlaylistStore {
    pub fn new(documents: Arc<dyn DocumentStore>) -> Self {
        Self { documents }
    }

    /// Create a playlist owned by `created_by`
    pub async fn create(&self, fields: PlaylistFields, created_by: UserId) -> Result<Playlist> {
        let playlist = Playlist {
            id: DocumentId::generate(),
            title: fields.title,
            description: fields.description,
            genre: fields.genre,
            track_ids: fields.track_ids.unwrap_or_default(),
            created_by,
        };

        self.documents
            .insert_one(Collection::Playlists, playlist.id, to_document(&playlist)?)
            .await
            .map_err(logged("insert playlist"))?;

        tracing::debug!("Created playlist {} for {}", playlist.id, playlist.created_by);
        self.get(playlist.id).await
    }

    /// Get playlist by ID
    pub async fn get(&self, id: DocumentId) -> Result<Playlist> {
        let document = self
            .documents
            .find_by_id(Collection::Playlists, id)
            .await
            .map_err(logged("find playlist"))?
            .ok_or_else(|| CatalogError::not_found(ENTITY, id.to_string()))?;

        from_document(document)
    }

    /// Replace title, description, genre and the reference list
    pub async fn update(&self, id: DocumentId, fields: PlaylistFields) -> Result<Playlist> {
        let track_ids = fields.track_ids.unwrap_or_default();
        let update = PlaylistUpdate {
            title: &fields.title,
            description: &fields.description,
            genre: &fields.genre,
            track_ids: &track_ids,
        };

        let matched = self
            .documents
            .update_by_id(Collection::Playlists, id, to_field_map(&update)?)
            .await
            .map_err(logged("update playlist"))?;

        if !matched {
            return Err(CatalogError::not_found(ENTITY, id.to_string()));
        }
        self.get(id).await
    }

    /// Delete playlist (tracks are never touched)
    pub async fn delete(&self, id: DocumentId) -> Result<()> {
        let deleted = self
            .documents
            .delete_by_id(Collection::Playlists, id)
            .await
            .map_err(logged("delete playlist"))?;

        if deleted {
            Ok(())
        } else {
            Err(CatalogError::not_found(ENTITY, id.to_string()))
        }
    }

    /// Search playlists by title, description and genre
    pub async fn search(&self, filter: &PlaylistFilter) -> Result<Vec<Playlist>> {
        let filter = Filter::new()
            .contains_opt("title", filter.title.as_deref())
            .contains_opt("description", filter.description.as_deref())
            .contains_opt("genre", filter.genre.as_deref());

        self.documents
            .find(Collection::Playlists, &filter)
            .await
            .map_err(logged("search playlists"))?
            .into_iter()
            .map(from_document)
            .collect()
    }
}
