//! Popup view surface

use tabstash_session::Session;

/// Severity of a status message: success renders green, error renders red.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Error,
}

/// The popup's UI surface, injected into the controller.
///
/// Exact rendering (DOM structure, control wiring) belongs to the
/// implementation; the controller only pushes state through this interface.
pub trait PopupView: Send + Sync {
    /// Current contents of the session-name input field.
    fn name_input(&self) -> String;

    /// Clears the session-name input field.
    fn clear_name_input(&self);

    /// Replaces the displayed list with `sessions`, oldest first. Each
    /// entry shows [`Session::display_label`] with restore and delete
    /// controls bound to that session's id.
    fn render_sessions(&self, sessions: &[Session]);

    /// Shows a status message.
    fn set_status(&self, message: &str, level: StatusLevel);

    /// Clears the status region.
    fn clear_status(&self);
}
