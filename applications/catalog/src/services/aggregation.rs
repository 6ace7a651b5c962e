//! Track aggregation: resolve a playlist's reference list into track entities

use async_trait::async_trait;
use setlist_core::{
    error::{CatalogError, Result},
    types::{DocumentId, MusicTrack},
};
use setlist_storage::TrackStore;
use std::collections::HashMap;

/// Resolves reference strings to the tracks that currently exist
#[async_trait]
pub trait TrackAggregator: Send + Sync {
    /// Fetch every referenced track in one bulk lookup
    ///
    /// Dangling references are skipped and duplicates collapse, so the result
    /// may be shorter than `track_ids`. Order is unspecified.
    async fn aggregate(&self, track_ids: &[String]) -> Result<Vec<MusicTrack>>;
}

/// `TrackAggregator` backed by the track collection
#[derive(Clone)]
pub struct StoreTrackAggregator {
    tracks: TrackStore,
}

impl StoreTrackAggregator {
    pub fn new(tracks: TrackStore) -> Self {
        Self { tracks }
    }
}

#[async_trait]
impl TrackAggregator for StoreTrackAggregator {
    async fn aggregate(&self, track_ids: &[String]) -> Result<Vec<MusicTrack>> {
        if track_ids.is_empty() {
            return Ok(Vec::new());
        }

        // All or nothing: one bad reference fails the whole lookup
        let ids = track_ids
            .iter()
            .map(|raw| {
                raw.parse::<DocumentId>().map_err(|e| {
                    tracing::error!("Unconvertible track reference '{}': {}", raw, e);
                    CatalogError::internal(format!("unconvertible track reference '{raw}'"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.tracks.find_by_ids(&ids).await
    }
}

/// Arrange resolved tracks in reference-list order
///
/// Each track appears once, at the position of its first reference. Dangling
/// references are skipped.
pub fn order_by_references(references: &[String], tracks: Vec<MusicTrack>) -> Vec<MusicTrack> {
    let mut by_id: HashMap<String, MusicTrack> = tracks
        .into_iter()
        .map(|track| (track.id.to_string(), track))
        .collect();

    references
        .iter()
        .filter_map(|reference| by_id.remove(&reference.to_ascii_lowercase()))
        .collect()
}
