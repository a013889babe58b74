//! Network-related error types.
//!
//! Errors raised while talking to the CRM backend: transport failures,
//! non-2xx responses and bodies that do not decode.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out at the transport layer.
    Timeout { url: String },

    /// Non-2xx response. `message` is the server's `message` field when the
    /// body carries one, otherwise the raw body or the status reason.
    HttpStatus { status: u16, message: String },

    /// Body could not be decoded into the expected payload.
    InvalidResponse { message: String },

    /// The configured base URL produced an unusable request URL.
    InvalidUrl { url: String },

    /// Generic transport error.
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } | NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            NetworkError::InvalidResponse { .. }
            | NetworkError::InvalidUrl { .. }
            | NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { url, .. } => {
                format!("Unable to reach the CRM server at {}.", url)
            }
            NetworkError::Timeout { .. } => "The CRM server did not answer in time.".to_string(),
            NetworkError::HttpStatus { status, message } => match *status {
                401 => "Your session has expired. Please sign in again.".to_string(),
                403 => "You don't have permission for this action.".to_string(),
                404 => "The requested record was not found.".to_string(),
                500..=599 => format!("The server reported an error: {}", message),
                _ => message.clone(),
            },
            NetworkError::InvalidResponse { .. } => {
                "Received an unexpected response from the server.".to_string()
            }
            NetworkError::InvalidUrl { url } => format!("Invalid server address: {}", url),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url } => write!(f, "Request to '{}' timed out", url),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {}: {}", status, message)
            }
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a transport error from an [`HttpClient`](crate::traits::HttpClient)
/// into a [`NetworkError`].
pub fn classify_http_error(err: HttpError, url: &str) -> NetworkError {
    match err {
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
            url: url.to_string(),
            message,
        },
        HttpError::Timeout(_) => NetworkError::Timeout {
            url: url.to_string(),
        },
        HttpError::ServerError { status, message } => NetworkError::HttpStatus { status, message },
        HttpError::InvalidUrl(_) => NetworkError::InvalidUrl {
            url: url.to_string(),
        },
        HttpError::Io(message) | HttpError::Other(message) => NetworkError::Other { message },
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend answers errors with `{"message": "..."}`; anything else falls
/// back to the trimmed body text, then to the bare status.
pub fn extract_error_message(status: u16, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        format!("request failed with status {}", status)
    } else {
        text.to_string()
    }
}
