//! Playlist consistency guard
//!
//! Every playlist write passes through [`PlaylistConsistencyGuard::check`]
//! before anything is persisted. A reference list is accepted only when each
//! entry resolves to exactly one existing track.

use super::aggregation::TrackAggregator;
use setlist_core::{
    error::{CatalogError, Result},
    types::MusicTrack,
};
use std::sync::Arc;

/// Outcome of a successful check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReferences {
    /// Normalized reference list (absent becomes empty)
    pub track_ids: Vec<String>,
    /// Tracks the list resolved to
    pub tracks: Vec<MusicTrack>,
}

#[derive(Clone)]
pub struct PlaylistConsistencyGuard {
    aggregator: Arc<dyn TrackAggregator>,
}

impl PlaylistConsistencyGuard {
    pub fn new(aggregator: Arc<dyn TrackAggregator>) -> Self {
        Self { aggregator }
    }

    /// Resolve `track_ids` and reject the list if any entry is dangling
    ///
    /// The comparison is by count, so a list naming the same track twice
    /// resolves short and is rejected as well.
    pub async fn check(&self, track_ids: Option<Vec<String>>) -> Result<ResolvedReferences> {
        let track_ids = track_ids.unwrap_or_default();
        let tracks = self.aggregator.aggregate(&track_ids).await?;

        if tracks.len() != track_ids.len() {
            tracing::debug!(
                "Rejecting reference list: {} requested, {} resolved",
                track_ids.len(),
                tracks.len()
            );
            return Err(CatalogError::ReferencedTrackNotFound {
                requested: track_ids.len(),
                resolved: tracks.len(),
            });
        }

        Ok(ResolvedReferences { track_ids, tracks })
    }
}
