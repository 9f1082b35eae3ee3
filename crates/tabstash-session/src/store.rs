//! Session store accessor

use async_trait::async_trait;

use crate::session::Session;
use crate::Result;

/// Fixed key the session collection is persisted under.
pub const SESSIONS_KEY: &str = "sessions";

/// Asynchronous accessor for the single persisted session collection.
///
/// The collection is read and written wholesale. A `load` followed by a
/// `save` is not atomic across concurrent callers: two interleaved
/// read-modify-write cycles race and the last write wins. That is an
/// accepted limitation of the storage contract, not a guarantee.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the stored sessions, oldest first. An absent value loads as
    /// the empty collection.
    async fn load(&self) -> Result<Vec<Session>>;

    /// Replaces the stored collection with `sessions`.
    async fn save(&self, sessions: &[Session]) -> Result<()>;
}
