/// Core traits for Setlist
use crate::error::Result;
use async_trait::async_trait;

/// File store trait
///
/// Implementers persist uploaded audio files and hand back an opaque link that
/// the catalog stores on the track record.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist `bytes` under a name derived from `name`
    ///
    /// # Errors
    /// Returns a storage error if the file cannot be written
    async fn save(&self, bytes: &[u8], name: &str) -> Result<String>;

    /// Remove the file behind `link`
    ///
    /// # Errors
    /// Returns a storage error if the link is unknown or removal fails
    async fn delete(&self, link: &str) -> Result<()>;
}
