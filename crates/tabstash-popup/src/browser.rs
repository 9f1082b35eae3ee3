//! Browser capabilities
//!
//! The two things the popup needs from the hosting browser: enumerating the
//! current window's tabs and opening a new window from a list of addresses.

use async_trait::async_trait;
use tabstash_session::TabInfo;
use thiserror::Error;

/// Failure reported by a browser capability call.
#[derive(Debug, Error)]
#[error("Browser call failed: {0}")]
pub struct BrowserError(pub String);

#[async_trait]
pub trait Browser: Send + Sync {
    /// Tabs of the current window, in display order. Read-only.
    async fn current_window_tabs(&self) -> std::result::Result<Vec<TabInfo>, BrowserError>;

    /// Opens a new window with one tab per address, in order. Returning is
    /// the completion signal: the window exists once this resolves.
    /// Addresses are passed through unvalidated.
    async fn open_window(&self, urls: &[String]) -> std::result::Result<(), BrowserError>;
}
