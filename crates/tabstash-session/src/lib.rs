//! Tabstash Session Model & Store
//!
//! A Session is a named, timestamped snapshot of a browser window's open
//! tabs. The whole collection is persisted as one JSON value under a fixed
//! key; the store owns durable state and callers hold only transient copies.

mod error;
mod inmemory;
mod session;
mod sqlite;
mod store;

pub use error::SessionError;
pub use inmemory::InMemorySessionStore;
pub use session::{Session, TabInfo};
pub use sqlite::SqliteSessionStore;
pub use store::{SessionStore, SESSIONS_KEY};

pub type Result<T> = std::result::Result<T, SessionError>;
