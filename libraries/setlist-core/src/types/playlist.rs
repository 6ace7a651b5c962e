//! Playlist types

use super::ids::{DocumentId, UserId};
use super::track::MusicTrack;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// Playlist record as stored
///
/// `track_ids` holds raw track identifiers in playlist order. The store does
/// not enforce that they resolve; see `PlaylistWithTracks` for the joined view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub genre: String,

    /// Reference list (omitted from output when empty)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub track_ids: Vec<String>,

    /// User who created the playlist, set once at creation
    pub created_by: UserId,
}

/// Data for creating or updating a playlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistFields {
    pub title: String,
    pub description: String,
    pub genre: String,

    /// `None` is treated as an empty reference list
    #[serde(default)]
    pub track_ids: Option<Vec<String>>,
}

impl PlaylistFields {
    /// Check required fields
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("genre", &self.genre),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(CatalogError::invalid_request(format!(
                    "playlist {name} is required"
                )));
            }
        }
        Ok(())
    }
}

/// Playlist paired with its resolved tracks
///
/// `tracks` may be shorter than the stored reference list when referenced
/// tracks have since been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistWithTracks {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub created_by: UserId,
    pub tracks: Vec<MusicTrack>,
}

impl PlaylistWithTracks {
    /// Join a stored playlist with its resolved tracks
    pub fn new(playlist: Playlist, tracks: Vec<MusicTrack>) -> Self {
        Self {
            id: playlist.id,
            title: playlist.title,
            description: playlist.description,
            genre: playlist.genre,
            created_by: playlist.created_by,
            tracks,
        }
    }
}

/// Playlist search criteria
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistFilter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}
