//! Durable session store over the local database

use async_trait::async_trait;
use std::path::Path;
use tabstash_storage::Database;

use crate::session::Session;
use crate::store::{SessionStore, SESSIONS_KEY};
use crate::Result;

/// Session store persisting the collection as one JSON value in the local
/// key-value database.
pub struct SqliteSessionStore {
    db: Database,
}

impl SqliteSessionStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Database::open(path)?))
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn load(&self) -> Result<Vec<Session>> {
        match self.db.get(SESSIONS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, sessions: &[Session]) -> Result<()> {
        let payload = serde_json::to_string(sessions)?;
        self.db.put(SESSIONS_KEY, &payload)?;

        tracing::debug!(count = sessions.len(), "Persisted session collection");

        Ok(())
    }
}
