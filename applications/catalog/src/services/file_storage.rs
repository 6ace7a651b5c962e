/// File storage service - keeps uploaded audio files on local disk
use async_trait::async_trait;
use setlist_core::{
    error::{CatalogError, Result},
    traits::FileStore,
};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct LocalFileStore {
    base_path: PathBuf,
}

impl LocalFileStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Initialize storage directory
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| CatalogError::storage(format!("Failed to create {:?}: {}", self.base_path, e)))
    }

    /// Validate that a path is within the storage directory (prevent directory traversal)
    pub fn validate_path(&self, path: &Path) -> Result<PathBuf> {
        let canonical_base = self
            .base_path
            .canonicalize()
            .map_err(|e| CatalogError::storage(format!("Invalid base path: {}", e)))?;

        let canonical_path = path
            .canonicalize()
            .map_err(|e| CatalogError::storage(format!("Invalid path: {}", e)))?;

        if !canonical_path.starts_with(&canonical_base) {
            return Err(CatalogError::storage(
                "Path traversal attempt detected".to_string(),
            ));
        }

        Ok(canonical_path)
    }
}

/// Reduce an uploaded file name to a single safe path component
fn sanitize_file_name(name: &str) -> String {
    let last = name.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    let cleaned: String = last
        .chars()
        .map(|c| if c.is_control() || c == ':' { '_' } else { c })
        .collect();

    match cleaned.as_str() {
        "" | "." | ".." => "upload".to_string(),
        _ => cleaned,
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(&self, bytes: &[u8], name: &str) -> Result<String> {
        let prefix = uuid::Uuid::new_v4().simple().to_string();
        let file_name = format!("{}_{}", prefix, sanitize_file_name(name));
        let path = self.base_path.join(file_name);

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CatalogError::storage(format!("Failed to create {:?}: {}", parent, e)))?;
        }

        fs::write(&path, bytes)
            .await
            .map_err(|e| CatalogError::storage(format!("Failed to write {:?}: {}", path, e)))?;

        tracing::debug!("Stored {} bytes at {:?}", bytes.len(), path);
        Ok(path.to_string_lossy().into_owned())
    }

    async fn delete(&self, link: &str) -> Result<()> {
        let path = self.validate_path(Path::new(link))?;

        fs::remove_file(&path)
            .await
            .map_err(|e| CatalogError::storage(format!("Failed to remove {:?}: {}", path, e)))?;

        tracing::debug!("Removed file {:?}", path);
        Ok(())
    }
}
