//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use blog_infra::StoreConfig;

/// Where articles are persisted.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// One JSON file per article under a data directory.
    Files(StoreConfig),
    /// Process memory only.
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let storage = match env::var("STORAGE") {
            Ok(kind) if kind.eq_ignore_ascii_case("memory") => StorageConfig::Memory,
            _ => StorageConfig::Files(StoreConfig {
                data_dir: env::var("DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| StoreConfig::default().data_dir),
            }),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8081),
            storage,
        }
    }
}
