//! Result type alias for CRM operations.

use super::context::ErrorContext;
use super::crm_error::CrmError;

/// Type alias for Results using CrmError.
pub type CrmResult<T> = Result<T, CrmError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    fn context(self, ctx: ErrorContext) -> CrmResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> CrmResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E: Into<CrmError>> ResultExt<T> for Result<T, E> {
    fn context(self, ctx: ErrorContext) -> CrmResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> CrmResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
