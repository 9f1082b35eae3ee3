//! In-memory session store

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::session::Session;
use crate::store::SessionStore;
use crate::Result;

/// In-memory stand-in for the durable store. Holds the raw JSON payload a
/// durable backend would hold, so callers exercise the same serialization
/// path either way.
#[derive(Default)]
pub struct InMemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Vec<Session>> {
        match self.slot.lock().as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, sessions: &[Session]) -> Result<()> {
        let payload = serde_json::to_string(sessions)?;
        *self.slot.lock() = Some(payload);
        Ok(())
    }
}
