//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! - [`JsonFileStore`] - one JSON file per record under a data directory
//! - [`InMemoryStore`] - process-local store, data is lost on restart
//! - [`DocumentArticleRepository`] - the article operations over any document store

pub mod database;

pub use database::{DocumentArticleRepository, InMemoryStore, JsonFileStore, StoreConfig};
