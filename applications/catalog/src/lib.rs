//! Setlist Catalog Library
//!
//! Track and playlist use-cases over a document store and a file store: the
//! consistency guard on playlist writes, track aggregation on reads, and
//! best-effort file cleanup on track deletion.
//!
//! This library exposes the core components for testing purposes.

pub mod config;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::CatalogConfig;
pub use services::{DeletionReport, LocalFileStore, PlaylistService, TrackService};
pub use state::CatalogState;
