//! Authentication-related error types.

use std::fmt;

/// Authentication-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// No token stored (user not signed in).
    NotAuthenticated,

    /// Login rejected by the server.
    LoginRejected { message: String },

    /// Stored credentials could not be read.
    CredentialsLoadFailed { message: String },

    /// Credentials could not be written.
    CredentialsSaveFailed { message: String },

    /// Server refused the token (HTTP 401/403).
    AccessDenied { status: u16 },
}

impl AuthError {
    /// Check if this error is resolved by signing in again.
    pub fn requires_reauth(&self) -> bool {
        matches!(
            self,
            AuthError::NotAuthenticated
                | AuthError::CredentialsLoadFailed { .. }
                | AuthError::AccessDenied { status: 401 }
        )
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::NotAuthenticated => {
                "You are not signed in. Please sign in to continue.".to_string()
            }
            AuthError::LoginRejected { message } => message.clone(),
            AuthError::CredentialsLoadFailed { .. } => {
                "Could not load your saved session. Please sign in again.".to_string()
            }
            AuthError::CredentialsSaveFailed { .. } => {
                "Could not save your session. Please check file permissions.".to_string()
            }
            AuthError::AccessDenied { status: 401 } => {
                "Your session has expired. Please sign in again.".to_string()
            }
            AuthError::AccessDenied { .. } => {
                "You don't have permission for this action.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::NotAuthenticated => "E_AUTH_NOT_AUTH",
            AuthError::LoginRejected { .. } => "E_AUTH_LOGIN",
            AuthError::CredentialsLoadFailed { .. } => "E_AUTH_CRED_LOAD",
            AuthError::CredentialsSaveFailed { .. } => "E_AUTH_CRED_SAVE",
            AuthError::AccessDenied { .. } => "E_AUTH_ACCESS",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotAuthenticated => write!(f, "Not authenticated"),
            AuthError::LoginRejected { message } => write!(f, "{}", message),
            AuthError::CredentialsLoadFailed { message } => {
                write!(f, "Failed to load credentials: {}", message)
            }
            AuthError::CredentialsSaveFailed { message } => {
                write!(f, "Failed to save credentials: {}", message)
            }
            AuthError::AccessDenied { status } => write!(f, "Access denied (HTTP {})", status),
        }
    }
}

impl std::error::Error for AuthError {}
