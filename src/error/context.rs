//! Error context for enriched error information.

use chrono::{DateTime, Utc};
use std::fmt;

/// Context information attached to errors for debugging.
///
/// Records which operation failed against which resource, so log lines can
/// name the entity without every error variant carrying it.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Operation that failed, e.g. `update`.
    pub operation: String,

    /// REST resource the operation targeted, e.g. `customers`.
    pub resource: Option<String>,

    /// Identifier of the record involved, if any.
    pub entity_id: Option<String>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
            entity_id: None,
            timestamp: Utc::now(),
        }
    }

    /// Set the resource for this context.
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Set the entity id for this context.
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Get a formatted context string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];
        if let Some(ref resource) = self.resource {
            parts.push(format!("resource={}", resource));
        }
        if let Some(ref id) = self.entity_id {
            parts.push(format!("entity_id={}", id));
        }
        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));
        parts.join(" ")
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation)?;
        if let Some(ref resource) = self.resource {
            write!(f, " {}", resource)?;
        }
        if let Some(ref id) = self.entity_id {
            write!(f, "/{}", id)?;
        }
        Ok(())
    }
}
