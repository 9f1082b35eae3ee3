//! Popup controller
//!
//! Each user action is a one-shot asynchronous cycle: load the stored
//! collection, compute the new collection or the display list, persist if
//! mutating, then re-render. The controller never caches sessions between
//! operations; it always re-reads before mutating. Two concurrently
//! triggered cycles can interleave around their suspension points, in which
//! case the last write wins.

use chrono::Local;
use std::sync::Arc;
use std::time::Duration;

use tabstash_session::{Session, SessionStore};

use crate::browser::Browser;
use crate::status::StatusBanner;
use crate::view::PopupView;
use crate::Result;

pub struct PopupController {
    store: Arc<dyn SessionStore>,
    browser: Arc<dyn Browser>,
    view: Arc<dyn PopupView>,
    status: StatusBanner,
}

impl PopupController {
    pub fn new(
        store: Arc<dyn SessionStore>,
        browser: Arc<dyn Browser>,
        view: Arc<dyn PopupView>,
    ) -> Self {
        let status = StatusBanner::new(Arc::clone(&view));
        Self {
            store,
            browser,
            view,
            status,
        }
    }

    /// Overrides the status auto-clear delay (default 3 seconds).
    pub fn with_status_timeout(mut self, timeout: Duration) -> Self {
        self.status = self.status.with_timeout(timeout);
        self
    }

    /// Initial render when the popup opens.
    pub async fn open(&self) -> Result<()> {
        self.refresh().await
    }

    /// Snapshots the current window's tabs as a new session appended to the
    /// stored collection. The session is named from the view's name input,
    /// falling back to a time-of-day label when the input is empty.
    pub async fn save_session(&self) -> Result<()> {
        let tabs = self.browser.current_window_tabs().await?;

        let input = self.view.name_input();
        let name = if input.is_empty() {
            format!("Session {}", Local::now().format("%H:%M:%S"))
        } else {
            input
        };
        let session = Session::new(name, tabs);

        let mut sessions = self.store.load().await?;
        sessions.push(session.clone());
        self.store.save(&sessions).await?;

        tracing::info!(
            session_id = %session.id,
            session_name = %session.name,
            tab_count = session.tab_count(),
            "Saved session"
        );

        self.status.success("Session saved!");
        self.view.clear_name_input();
        self.refresh().await
    }

    /// Restores the most recently saved session. With nothing stored, shows
    /// an error status and issues no window-creation call.
    pub async fn restore_latest(&self) -> Result<()> {
        let sessions = self.store.load().await?;
        match sessions.last() {
            Some(last) => self.restore_session(last).await,
            None => {
                self.status.error("No sessions to restore.");
                Ok(())
            }
        }
    }

    /// Restores `session` by opening a new window with its tab addresses in
    /// their original order. Shared by the restore-latest path and the
    /// per-entry restore control.
    pub async fn restore_session(&self, session: &Session) -> Result<()> {
        let urls: Vec<String> = session.tabs.iter().map(|tab| tab.url.clone()).collect();
        self.browser.open_window(&urls).await?;

        tracing::info!(
            session_id = %session.id,
            session_name = %session.name,
            "Restored session"
        );

        self.status
            .success(&format!("Restored session: {}", session.name));
        Ok(())
    }

    /// Removes the session with the given id, preserving the relative order
    /// of the remaining entries. An unknown id leaves the collection as-is.
    pub async fn delete_session(&self, session_id: &str) -> Result<()> {
        let mut sessions = self.store.load().await?;
        sessions.retain(|session| session.id != session_id);
        self.store.save(&sessions).await?;

        tracing::info!(session_id = %session_id, "Deleted session");

        self.status.success("Session deleted!");
        self.refresh().await
    }

    /// Unconditionally replaces the stored collection with the empty one.
    pub async fn delete_all(&self) -> Result<()> {
        self.store.save(&[]).await?;

        tracing::info!("Deleted all sessions");

        self.status.success("All sessions deleted!");
        self.refresh().await
    }

    async fn refresh(&self) -> Result<()> {
        let sessions = self.store.load().await?;
        self.view.render_sessions(&sessions);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::BrowserError;
    use crate::view::StatusLevel;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use tabstash_session::{InMemorySessionStore, TabInfo};

    struct FakeBrowser {
        tabs: Vec<TabInfo>,
        opened_windows: Mutex<Vec<Vec<String>>>,
    }

    impl FakeBrowser {
        fn with_tabs(tabs: Vec<TabInfo>) -> Self {
            Self {
                tabs,
                opened_windows: Mutex::new(Vec::new()),
            }
        }

        fn opened_windows(&self) -> Vec<Vec<String>> {
            self.opened_windows.lock().clone()
        }
    }

    #[async_trait]
    impl Browser for FakeBrowser {
        async fn current_window_tabs(&self) -> std::result::Result<Vec<TabInfo>, BrowserError> {
            Ok(self.tabs.clone())
        }

        async fn open_window(&self, urls: &[String]) -> std::result::Result<(), BrowserError> {
            self.opened_windows.lock().push(urls.to_vec());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeView {
        name_input: Mutex<String>,
        rendered: Mutex<Vec<Vec<Session>>>,
        status: Mutex<Option<(String, StatusLevel)>>,
    }

    impl FakeView {
        fn type_name(&self, name: &str) {
            *self.name_input.lock() = name.to_string();
        }

        fn last_render(&self) -> Vec<Session> {
            self.rendered.lock().last().cloned().unwrap_or_default()
        }

        fn status(&self) -> Option<(String, StatusLevel)> {
            self.status.lock().clone()
        }
    }

    impl PopupView for FakeView {
        fn name_input(&self) -> String {
            self.name_input.lock().clone()
        }

        fn clear_name_input(&self) {
            self.name_input.lock().clear();
        }

        fn render_sessions(&self, sessions: &[Session]) {
            self.rendered.lock().push(sessions.to_vec());
        }

        fn set_status(&self, message: &str, level: StatusLevel) {
            *self.status.lock() = Some((message.to_string(), level));
        }

        fn clear_status(&self) {
            *self.status.lock() = None;
        }
    }

    struct Harness {
        store: Arc<InMemorySessionStore>,
        browser: Arc<FakeBrowser>,
        view: Arc<FakeView>,
        controller: PopupController,
    }

    fn harness(tabs: Vec<TabInfo>) -> Harness {
        let store = Arc::new(InMemorySessionStore::new());
        let browser = Arc::new(FakeBrowser::with_tabs(tabs));
        let view = Arc::new(FakeView::default());
        let controller = PopupController::new(
            Arc::clone(&store) as Arc<dyn SessionStore>,
            Arc::clone(&browser) as Arc<dyn Browser>,
            Arc::clone(&view) as Arc<dyn PopupView>,
        );
        Harness {
            store,
            browser,
            view,
            controller,
        }
    }

    fn docs_tab() -> TabInfo {
        TabInfo::new("Docs", "https://example.com")
    }

    #[tokio::test]
    async fn test_saves_append_in_call_order() {
        let h = harness(vec![docs_tab()]);

        for name in ["one", "two", "three"] {
            h.view.type_name(name);
            h.controller.save_session().await.unwrap();
        }

        let sessions = h.store.load().await.unwrap();
        assert_eq!(sessions.len(), 3);
        let names: Vec<&str> = sessions.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_save_with_empty_name_generates_time_label() {
        let h = harness(vec![docs_tab()]);

        h.controller.save_session().await.unwrap();

        let sessions = h.store.load().await.unwrap();
        assert_eq!(sessions.len(), 1);
        let session = &sessions[0];
        assert!(session.name.starts_with("Session "));
        assert!(
            session.name.contains(':'),
            "auto-generated name should contain a time string: {}",
            session.name
        );
        assert_eq!(session.tabs, vec![docs_tab()]);
        assert!(!session.id.is_empty());

        // the list shows the one saved entry
        assert_eq!(h.view.last_render().len(), 1);
        assert_eq!(
            h.view.status(),
            Some(("Session saved!".to_string(), StatusLevel::Success))
        );
    }

    #[tokio::test]
    async fn test_save_uses_typed_name_and_clears_input() {
        let h = harness(vec![docs_tab()]);

        h.view.type_name("Work");
        h.controller.save_session().await.unwrap();

        let sessions = h.store.load().await.unwrap();
        assert_eq!(sessions[0].name, "Work");
        assert_eq!(h.view.name_input(), "");
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_preserving_order() {
        let h = harness(vec![docs_tab()]);
        for name in ["a", "b", "c"] {
            h.view.type_name(name);
            h.controller.save_session().await.unwrap();
        }
        let sessions = h.store.load().await.unwrap();

        h.controller.delete_session(&sessions[1].id).await.unwrap();

        let after = h.store.load().await.unwrap();
        let names: Vec<&str> = after.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
        assert_eq!(
            h.view.status(),
            Some(("Session deleted!".to_string(), StatusLevel::Success))
        );
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let h = harness(vec![docs_tab()]);
        h.controller.save_session().await.unwrap();
        let before = h.store.load().await.unwrap();

        h.controller.delete_session("0").await.unwrap();

        assert_eq!(h.store.load().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_first_of_two_leaves_second_intact() {
        let h = harness(vec![docs_tab()]);
        for name in ["first", "second"] {
            h.view.type_name(name);
            h.controller.save_session().await.unwrap();
        }
        let sessions = h.store.load().await.unwrap();
        let second = sessions[1].clone();

        h.controller.delete_session(&sessions[0].id).await.unwrap();

        assert_eq!(h.store.load().await.unwrap(), vec![second]);
    }

    #[tokio::test]
    async fn test_delete_all_empties_store_and_list() {
        let h = harness(vec![docs_tab()]);
        for _ in 0..3 {
            h.controller.save_session().await.unwrap();
        }

        h.controller.delete_all().await.unwrap();

        assert!(h.store.load().await.unwrap().is_empty());
        assert!(h.view.last_render().is_empty());
        assert_eq!(
            h.view.status(),
            Some(("All sessions deleted!".to_string(), StatusLevel::Success))
        );
    }

    #[tokio::test]
    async fn test_restore_opens_window_with_addresses_in_order() {
        let h = harness(vec![
            TabInfo::new("A", "https://a.example"),
            TabInfo::new("", "https://b.example"),
            TabInfo::new("C", "not a url"),
        ]);
        h.controller.save_session().await.unwrap();
        let session = h.store.load().await.unwrap()[0].clone();

        h.controller.restore_session(&session).await.unwrap();

        // addresses pass through in order, unvalidated
        assert_eq!(
            h.browser.opened_windows(),
            vec![vec![
                "https://a.example".to_string(),
                "https://b.example".to_string(),
                "not a url".to_string(),
            ]]
        );
        assert_eq!(
            h.view.status(),
            Some((
                format!("Restored session: {}", session.name),
                StatusLevel::Success
            ))
        );
    }

    #[tokio::test]
    async fn test_restore_latest_picks_last_saved() {
        let h = harness(vec![docs_tab()]);
        for name in ["older", "newer"] {
            h.view.type_name(name);
            h.controller.save_session().await.unwrap();
        }

        h.controller.restore_latest().await.unwrap();

        assert_eq!(h.browser.opened_windows().len(), 1);
        assert_eq!(
            h.view.status(),
            Some(("Restored session: newer".to_string(), StatusLevel::Success))
        );
    }

    #[tokio::test]
    async fn test_restore_latest_with_nothing_stored_reports_error() {
        let h = harness(Vec::new());

        h.controller.restore_latest().await.unwrap();

        assert!(h.browser.opened_windows().is_empty());
        assert_eq!(
            h.view.status(),
            Some(("No sessions to restore.".to_string(), StatusLevel::Error))
        );
    }

    #[tokio::test]
    async fn test_open_renders_stored_sessions() {
        let h = harness(Vec::new());
        h.store
            .save(&[Session::new("existing".to_string(), vec![docs_tab()])])
            .await
            .unwrap();

        h.controller.open().await.unwrap();

        let rendered = h.view.last_render();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].name, "existing");
    }

    #[tokio::test]
    async fn test_render_happens_after_each_mutation() {
        let h = harness(vec![docs_tab()]);

        h.controller.save_session().await.unwrap();
        assert_eq!(h.view.last_render().len(), 1);

        h.controller.save_session().await.unwrap();
        assert_eq!(h.view.last_render().len(), 2);

        let id = h.store.load().await.unwrap()[0].id.clone();
        h.controller.delete_session(&id).await.unwrap();
        assert_eq!(h.view.last_render().len(), 1);
    }
}
