//! Configuration error types.

use std::fmt;

/// Errors raised while assembling [`CrmConfig`](crate::startup::CrmConfig).
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A setting holds a value that cannot be used.
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },

    /// A flag was given without its value.
    MissingValue { key: String },
}

impl ConfigError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::InvalidValue { key, value, message } => {
                format!("{} has an invalid value '{}': {}", key, value, message)
            }
            ConfigError::MissingValue { key } => format!("{} requires a value", key),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidValue { .. } => "E_CFG_INVALID",
            ConfigError::MissingValue { .. } => "E_CFG_MISSING",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ConfigError {}
