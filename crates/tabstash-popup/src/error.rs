//! Popup error types

use thiserror::Error;

use crate::browser::BrowserError;

#[derive(Error, Debug)]
pub enum PopupError {
    #[error("Session error: {0}")]
    Session(#[from] tabstash_session::SessionError),

    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),
}
