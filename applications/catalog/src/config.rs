/// Catalog configuration
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_file_storage_path")]
    pub file_storage_path: PathBuf,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl CatalogConfig {
    /// Load configuration from file and environment
    ///
    /// `path` overrides the default `config.toml`. An explicit path must exist;
    /// the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from("config.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (SETLIST_STORAGE__DATABASE_URL, ...)
        settings = settings.add_source(
            config::Environment::with_prefix("SETLIST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        settings
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.database_url.trim().is_empty() {
            bail!("Database URL is required (set SETLIST_STORAGE__DATABASE_URL)");
        }

        if self.storage.max_connections == 0 {
            bail!("storage.max_connections must be at least 1");
        }

        Ok(())
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
        file_storage_path: default_file_storage_path(),
        max_connections: default_max_connections(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/setlist.db".to_string()
}

fn default_file_storage_path() -> PathBuf {
    PathBuf::from("./data/files")
}

fn default_max_connections() -> u32 {
    5
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
        }
    }
}
