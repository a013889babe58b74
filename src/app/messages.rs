//! AppMessage enum for async communication within the application.
//!
//! Store-bound results travel as actions; these messages carry what the
//! UI itself must react to, such as navigating after a save.

use std::path::PathBuf;

use crate::error::CrmError;
use crate::models::EntityKind;

/// A request that failed, reduced to what the UI needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Wording for people, not logs.
    pub message: String,
    /// Suggested next step for the error's category.
    pub hint: &'static str,
    /// Repeating the same request may succeed.
    pub retryable: bool,
    /// The server no longer accepts the session token.
    pub reauth: bool,
}

impl Failure {
    /// One line for the footer, prefixed with what was being done.
    pub fn notice_text(&self, what: &str) -> String {
        let message = self.message.trim_end_matches('.');
        if self.retryable {
            format!("{}: {}. {}", what, message, self.hint)
        } else {
            format!("{}: {}", what, message)
        }
    }
}

impl From<&CrmError> for Failure {
    fn from(err: &CrmError) -> Self {
        Self {
            message: err.user_message(),
            hint: err.category().recovery_hint(),
            retryable: err.is_retryable(),
            reauth: err.requires_reauth(),
        }
    }
}

impl From<CrmError> for Failure {
    fn from(err: CrmError) -> Self {
        Self::from(&err)
    }
}

/// Messages received from spawned request tasks
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    LoginFinished(Result<(), Failure>),
    /// Password reset request answered with the server's confirmation text.
    ResetRequested(Result<String, Failure>),
    /// Create or update submitted from a form.
    Saved {
        kind: EntityKind,
        result: Result<(), Failure>,
    },
    Deleted {
        kind: EntityKind,
        result: Result<(), Failure>,
    },
    /// User locked or unlocked; carries the user's name.
    StatusToggled(Result<String, Failure>),
    Exported {
        kind: EntityKind,
        result: Result<PathBuf, Failure>,
    },
    /// A background request was rejected with 401.
    SessionExpired,
    LoggedOut,
}
