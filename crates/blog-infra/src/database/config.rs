use std::path::PathBuf;

/// Configuration for the file-backed document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Root directory; each collection gets a subdirectory.
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("blog"),
        }
    }
}
