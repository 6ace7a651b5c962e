//! Music track types

use super::ids::DocumentId;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// Music track record
///
/// `link` is an opaque reference to the stored audio file, as returned by the
/// file store when the file was uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicTrack {
    pub id: DocumentId,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub year: u32,
    /// Duration in seconds
    pub duration: u32,
    pub link: String,
}

impl MusicTrack {
    /// Assemble a track from its identifier and field values
    pub fn from_fields(id: DocumentId, fields: TrackFields) -> Self {
        Self {
            id,
            title: fields.title,
            artist: fields.artist,
            album: fields.album,
            genre: fields.genre,
            year: fields.year,
            duration: fields.duration,
            link: fields.link,
        }
    }

    /// Field values without the identifier
    pub fn fields(&self) -> TrackFields {
        TrackFields {
            title: self.title.clone(),
            artist: self.artist.clone(),
            album: self.album.clone(),
            genre: self.genre.clone(),
            year: self.year,
            duration: self.duration,
            link: self.link.clone(),
        }
    }
}

/// Data for creating or fully replacing a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackFields {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub year: u32,
    pub duration: u32,
    pub link: String,
}

impl TrackFields {
    /// Check required fields and numeric bounds
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("artist", &self.artist),
            ("album", &self.album),
            ("genre", &self.genre),
            ("link", &self.link),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(CatalogError::invalid_request(format!(
                    "track {name} is required"
                )));
            }
        }

        if self.year < 1 {
            return Err(CatalogError::invalid_request("track year must be at least 1"));
        }
        if self.duration < 1 {
            return Err(CatalogError::invalid_request(
                "track duration must be at least 1 second",
            ));
        }

        Ok(())
    }
}

/// Track search criteria
///
/// Each present, non-blank field is matched as a case-insensitive substring;
/// all present fields must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackFilter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}
