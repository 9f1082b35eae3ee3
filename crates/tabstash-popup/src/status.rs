//! Transient status messages

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::view::{PopupView, StatusLevel};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Shows a message through the view's status region and clears it after a
/// fixed delay. A newer message overwrites the old one and restarts the
/// timer. Must be used from within a Tokio runtime.
pub(crate) struct StatusBanner {
    view: Arc<dyn PopupView>,
    timeout: Duration,
    pending_clear: Mutex<Option<JoinHandle<()>>>,
}

impl StatusBanner {
    pub(crate) fn new(view: Arc<dyn PopupView>) -> Self {
        Self {
            view,
            timeout: DEFAULT_TIMEOUT,
            pending_clear: Mutex::new(None),
        }
    }

    pub(crate) fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn success(&self, message: &str) {
        self.show(message, StatusLevel::Success);
    }

    pub(crate) fn error(&self, message: &str) {
        self.show(message, StatusLevel::Error);
    }

    fn show(&self, message: &str, level: StatusLevel) {
        self.view.set_status(message, level);

        let view = Arc::clone(&self.view);
        let timeout = self.timeout;
        let clear = tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            view.clear_status();
        });

        if let Some(previous) = self.pending_clear.lock().replace(clear) {
            previous.abort();
        }
    }
}

impl Drop for StatusBanner {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_clear.lock().take() {
            pending.abort();
        }
    }
}
