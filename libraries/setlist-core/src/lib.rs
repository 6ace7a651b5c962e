//! Setlist Core
//!
//! Store-agnostic domain types, capability traits, and error handling for the
//! Setlist catalog.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `MusicTrack`, `Playlist`, `PlaylistWithTracks`, and their
//!   write payloads and search filters
//! - **Identifiers**: `DocumentId` (store-native, 24 hex digits) and the
//!   identifier validator
//! - **Capabilities**: `DocumentStore` and `FileStore`, implemented by the
//!   storage crate and the catalog application
//! - **Error Handling**: Unified `CatalogError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use setlist_core::types::{DocumentId, TrackFields};
//! use setlist_core::validation::is_document_id;
//!
//! let id = DocumentId::generate();
//! assert!(is_document_id(&id.to_string()));
//!
//! let fields = TrackFields {
//!     title: "Lo-Fi Dreams".to_string(),
//!     artist: "Nightbus".to_string(),
//!     album: "Late Shifts".to_string(),
//!     genre: "lo-fi".to_string(),
//!     year: 2021,
//!     duration: 184,
//!     link: "data/files/lofi.mp3".to_string(),
//! };
//! assert!(fields.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{CatalogError, ErrorKind, Result};
pub use storage::{Collection, DocumentStore, Filter};
pub use traits::FileStore;

pub use types::{
    DocumentId, MusicTrack, Playlist, PlaylistFields, PlaylistFilter, PlaylistWithTracks,
    TrackFields, TrackFilter, UserId,
};
