//! Session data structures

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

/// Snapshot of one tab at the moment a session was saved. Carries no
/// identity of its own beyond its position in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    /// Page title at save time
    pub title: String,
    /// Navigable address at save time
    pub url: String,
}

impl TabInfo {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Get display title (with fallback to URL)
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// A named, timestamped snapshot of a window's open tabs. Immutable after
/// creation; the only mutation is whole-record deletion from the collection.
///
/// Serialized field names stay camelCase so the persisted JSON matches data
/// written by the original extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique identifier, derived from a monotonic millisecond clock reading
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// When the session was saved
    pub created_at: DateTime<Utc>,
    /// Tabs in their original window order
    pub tabs: Vec<TabInfo>,
}

impl Session {
    pub fn new(name: String, tabs: Vec<TabInfo>) -> Self {
        Self {
            id: next_session_id(),
            name,
            created_at: Utc::now(),
            tabs,
        }
    }

    /// Get the number of tabs
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// List label: name followed by the localized creation time.
    pub fn display_label(&self) -> String {
        let local = self.created_at.with_timezone(&Local);
        format!("{} ({})", self.name, local.format("%Y-%m-%d %H:%M:%S"))
    }
}

static LAST_ID_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Millisecond-clock session id, forced strictly increasing so two saves in
/// the same millisecond cannot collide.
fn next_session_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ID_MILLIS.load(Ordering::SeqCst);
    loop {
        let candidate = now.max(last + 1);
        match LAST_ID_MILLIS.compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
        {
            Ok(_) => return candidate.to_string(),
            Err(observed) => last = observed,
        }
    }
}
