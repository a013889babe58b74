//! Unified error type for the CRM client.

use std::fmt;

use super::auth::AuthError;
use super::category::ErrorCategory;
use super::config::ConfigError;
use super::context::ErrorContext;
use super::network::NetworkError;
use super::system::SystemError;

/// Unified error type for the CRM client.
///
/// Every fallible API or storage call returns this; coordinators flatten it
/// to its `Display` string before it reaches a state slice.
#[derive(Debug)]
pub enum CrmError {
    /// Transport, HTTP status and decoding errors.
    Network(NetworkError),

    /// Session and credential errors.
    Auth(AuthError),

    /// Filesystem errors.
    System(SystemError),

    /// Settings errors.
    Config(ConfigError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<CrmError>,
        context: ErrorContext,
    },
}

impl CrmError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            CrmError::Network(NetworkError::HttpStatus { status, .. }) => match *status {
                401 | 403 => ErrorCategory::Auth,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::User,
            },
            CrmError::Network(NetworkError::InvalidResponse { .. }) => ErrorCategory::Client,
            CrmError::Network(NetworkError::InvalidUrl { .. }) => ErrorCategory::Configuration,
            CrmError::Network(_) => ErrorCategory::Network,
            CrmError::Auth(err) => {
                if err.requires_reauth() {
                    ErrorCategory::Auth
                } else {
                    ErrorCategory::User
                }
            }
            CrmError::System(_) => ErrorCategory::System,
            CrmError::Config(_) => ErrorCategory::Configuration,
            CrmError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            CrmError::Network(err) => err.is_retryable(),
            CrmError::Auth(_) | CrmError::Config(_) => false,
            CrmError::System(err) => err.is_transient(),
            CrmError::WithContext { error, .. } => error.is_retryable(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            CrmError::Network(err) => err.user_message(),
            CrmError::Auth(err) => err.user_message(),
            CrmError::System(err) => err.user_message(),
            CrmError::Config(err) => err.user_message(),
            CrmError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CrmError::Network(err) => err.error_code(),
            CrmError::Auth(err) => err.error_code(),
            CrmError::System(err) => err.error_code(),
            CrmError::Config(err) => err.error_code(),
            CrmError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        CrmError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            CrmError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Check if this error requires signing in again.
    pub fn requires_reauth(&self) -> bool {
        match self {
            CrmError::Auth(err) => err.requires_reauth(),
            CrmError::Network(NetworkError::HttpStatus { status: 401, .. }) => true,
            CrmError::WithContext { error, .. } => error.requires_reauth(),
            _ => false,
        }
    }
}

impl fmt::Display for CrmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrmError::Network(err) => write!(f, "{}", err),
            CrmError::Auth(err) => write!(f, "{}", err),
            CrmError::System(err) => write!(f, "{}", err),
            CrmError::Config(err) => write!(f, "{}", err),
            // Context is for logs; the slice error text stays the bare cause.
            CrmError::WithContext { error, .. } => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for CrmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrmError::Network(err) => Some(err),
            CrmError::Auth(err) => Some(err),
            CrmError::System(err) => Some(err),
            CrmError::Config(err) => Some(err),
            CrmError::WithContext { error, .. } => error.source(),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<NetworkError> for CrmError {
    fn from(err: NetworkError) -> Self {
        CrmError::Network(err)
    }
}

impl From<AuthError> for CrmError {
    fn from(err: AuthError) -> Self {
        CrmError::Auth(err)
    }
}

impl From<SystemError> for CrmError {
    fn from(err: SystemError) -> Self {
        CrmError::System(err)
    }
}

impl From<ConfigError> for CrmError {
    fn from(err: ConfigError) -> Self {
        CrmError::Config(err)
    }
}

impl From<std::io::Error> for CrmError {
    fn from(err: std::io::Error) -> Self {
        use super::system::classify_io_error;
        CrmError::System(classify_io_error(err, None, "I/O operation"))
    }
}

impl From<serde_json::Error> for CrmError {
    fn from(err: serde_json::Error) -> Self {
        CrmError::Network(NetworkError::InvalidResponse {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn status(status: u16) -> CrmError {
        NetworkError::HttpStatus {
            status,
            message: "x".to_string(),
        }
        .into()
    }

    #[test]
    fn test_http_status_categories() {
        assert_eq!(status(401).category(), ErrorCategory::Auth);
        assert_eq!(status(404).category(), ErrorCategory::User);
        assert_eq!(status(500).category(), ErrorCategory::Server);
    }

    #[test]
    fn test_json_error_is_client_category() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CrmError = json_err.into();
        assert_eq!(err.category(), ErrorCategory::Client);
        assert_eq!(err.error_code(), "E_NET_INVALID");
    }

    #[test]
    fn test_with_context_preserves_display_and_category() {
        let err = status(503).with_context(ErrorContext::new("list").with_resource("orders"));
        assert_eq!(err.to_string(), "HTTP 503: x");
        assert_eq!(err.category(), ErrorCategory::Server);
        assert!(err.is_retryable());
        assert!(err.context().is_some());
    }

    #[test]
    fn test_requires_reauth() {
        assert!(status(401).requires_reauth());
        assert!(!status(403).requires_reauth());
        assert!(CrmError::from(AuthError::NotAuthenticated).requires_reauth());
    }

    #[test]
    fn test_system_error_conversion() {
        let err: CrmError = SystemError::FileNotFound {
            path: PathBuf::from("/nope"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert!(!err.is_retryable());
    }
}
