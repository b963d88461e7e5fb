//! # Blog Core
//!
//! The domain layer of the blog.
//! Articles, comments and the ports the storage adapters implement. No I/O lives here.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::StoreError;
