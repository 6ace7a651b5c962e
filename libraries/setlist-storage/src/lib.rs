//! Setlist Storage
//!
//! Document storage for the Setlist catalog.
//!
//! This crate provides:
//!
//! - **`SqliteDocumentStore`**: the production `DocumentStore`, one `SQLite`
//!   table per collection holding JSON documents
//! - **`MemoryDocumentStore`**: an in-process `DocumentStore` for tests and
//!   ephemeral runs
//! - **Store adapters**: `TrackStore` and `PlaylistStore`, typed CRUD and
//!   search over the two collections (no joins)
//!
//! # Example
//!
//! ```rust,no_run
//! use setlist_storage::{create_pool, run_migrations, SqliteDocumentStore, PlaylistStore};
//! use setlist_core::PlaylistFilter;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://setlist.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let documents = Arc::new(SqliteDocumentStore::new(pool));
//! let playlists = PlaylistStore::new(documents);
//!
//! let all = playlists.search(&PlaylistFilter::default()).await?;
//! # Ok(())
//! # }
//! ```

mod codec;
mod error;
mod memory;
mod sqlite;

// Vertical slices
pub mod playlists;
pub mod tracks;

pub use error::StorageError;
pub use memory::MemoryDocumentStore;
pub use playlists::PlaylistStore;
pub use sqlite::SqliteDocumentStore;
pub use tracks::TrackStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://setlist.db>`)
/// * `max_connections` - upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!("Pool created");

    Ok(pool)
}
