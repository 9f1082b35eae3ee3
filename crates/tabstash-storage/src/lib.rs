//! Tabstash Storage Layer
//!
//! SQLite-backed key-value persistence. Durable state lives in a single
//! `kv` table; each value is an opaque string owned by the caller.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
