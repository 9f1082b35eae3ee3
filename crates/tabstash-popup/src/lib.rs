//! Tabstash Popup Controller
//!
//! Binds the popup's user actions (save, restore, delete, list) to the
//! session store and the browser. The store, the browser capabilities, and
//! the UI surface are injected abstractions; the controller owns no durable
//! state and holds no session data across operations.

mod browser;
mod config;
mod controller;
mod error;
mod status;
mod view;

pub use browser::{Browser, BrowserError};
pub use config::Config;
pub use controller::PopupController;
pub use error::PopupError;
pub use view::{PopupView, StatusLevel};

// Re-export the session layer for consumers wiring a popup together
pub use tabstash_session::{
    InMemorySessionStore, Session, SessionError, SessionStore, SqliteSessionStore, TabInfo,
};

use std::sync::Arc;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, PopupError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

/// Wires a controller over the durable store described by `config`.
pub fn controller_from_config(
    config: &Config,
    browser: Arc<dyn Browser>,
    view: Arc<dyn PopupView>,
) -> Result<PopupController> {
    let store = SqliteSessionStore::open(&config.database_path)?;
    Ok(PopupController::new(Arc::new(store), browser, view)
        .with_status_timeout(Duration::from_millis(config.status_timeout_ms)))
}
