/// Catalog services
pub mod aggregation;
pub mod consistency;
pub mod file_storage;
pub mod playlists;
pub mod projection;
pub mod track_deletion;
pub mod tracks;

pub use aggregation::{order_by_references, StoreTrackAggregator, TrackAggregator};
pub use consistency::{PlaylistConsistencyGuard, ResolvedReferences};
pub use file_storage::LocalFileStore;
pub use playlists::PlaylistService;
pub use projection::project_search_results;
pub use track_deletion::{CleanupWarning, DeletionReport, TrackDeletionCoordinator};
pub use tracks::TrackService;
