//! Error category classification for unified error handling.
//!
//! A category picks the recovery hint shown next to a failure and tags
//! failure logs.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS, timeout. Generally transient.
    Network,

    /// Authentication/authorization errors.
    /// May require signing in again.
    Auth,

    /// Backend errors (HTTP 5xx).
    Server,

    /// Client-side errors (undecodable payloads, invalid state).
    Client,

    /// User action required (invalid input, not found).
    User,

    /// Filesystem or OS errors.
    System,

    /// Missing or invalid settings.
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns a suggested next step for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the CRM server is reachable and press r to reload",
            ErrorCategory::Auth => "Sign out and sign back in",
            ErrorCategory::Server => "The CRM server reported a problem. Try again later",
            ErrorCategory::Client => "The server sent data this client could not read",
            ErrorCategory::User => "Check your input and try again",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Check CRM_API_URL and the other CRM_* settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Network), "network");
        assert_eq!(format!("{}", ErrorCategory::Configuration), "configuration");
    }

    #[test]
    fn test_category_recovery_hint() {
        assert!(ErrorCategory::Network.recovery_hint().contains("reload"));
        assert!(ErrorCategory::Auth.recovery_hint().contains("sign"));
        assert!(ErrorCategory::Configuration.recovery_hint().contains("CRM_API_URL"));
    }
}
