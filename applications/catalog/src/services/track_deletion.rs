//! Track deletion: remove the record, then make a best-effort attempt at the file

use serde::Serialize;
use setlist_core::{error::Result, types::DocumentId};
use setlist_storage::TrackStore;

/// A stored file that outlived its track record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupWarning {
    pub link: String,
    pub reason: String,
}

/// Result of a track deletion
///
/// The record is always gone when a report is returned. `orphaned_file` is set
/// when the backing file could not be removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionReport {
    pub id: DocumentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orphaned_file: Option<CleanupWarning>,
}

impl DeletionReport {
    pub fn is_clean(&self) -> bool {
        self.orphaned_file.is_none()
    }
}

#[derive(Clone)]
pub struct TrackDeletionCoordinator {
    tracks: TrackStore,
}

impl TrackDeletionCoordinator {
    pub fn new(tracks: TrackStore) -> Self {
        Self { tracks }
    }

    /// Delete a track record and its file
    ///
    /// A failed record delete aborts with the file untouched. A failed file
    /// delete is logged and reported, never returned as an error.
    pub async fn delete(&self, id: DocumentId) -> Result<DeletionReport> {
        let track = self.tracks.get(id).await?;

        self.tracks.delete_record(id).await?;
        tracing::info!("Deleted track {}", id);

        let orphaned_file = match self.tracks.delete_file(&track.link).await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(
                    "Track {} deleted but its file {} could not be removed: {}",
                    id,
                    track.link,
                    e
                );
                Some(CleanupWarning {
                    link: track.link,
                    reason: e.to_string(),
                })
            }
        };

        Ok(DeletionReport { id, orphaned_file })
    }
}
