//! Document storage and the article repository built on it.

mod article_repo;
mod config;
mod json_store;
mod memory;

pub use article_repo::DocumentArticleRepository;
pub use config::StoreConfig;
pub use json_store::JsonFileStore;
pub use memory::InMemoryStore;
