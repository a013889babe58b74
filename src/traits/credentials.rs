//! Credentials provider trait abstraction.
//!
//! The stored session (token plus user record) is the only state that
//! outlives a run of the client.

use async_trait::async_trait;

use crate::auth::Credentials;

/// Credentials operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CredentialsError {
    /// Failed to load credentials
    LoadFailed(String),
    /// Failed to save credentials
    SaveFailed(String),
    /// Failed to clear credentials
    ClearFailed(String),
}

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialsError::LoadFailed(msg) => write!(f, "Failed to load credentials: {}", msg),
            CredentialsError::SaveFailed(msg) => write!(f, "Failed to save credentials: {}", msg),
            CredentialsError::ClearFailed(msg) => {
                write!(f, "Failed to clear credentials: {}", msg)
            }
        }
    }
}

impl std::error::Error for CredentialsError {}

impl From<CredentialsError> for crate::error::CrmError {
    fn from(err: CredentialsError) -> Self {
        use crate::error::AuthError;
        match err {
            CredentialsError::LoadFailed(message) => {
                AuthError::CredentialsLoadFailed { message }.into()
            }
            CredentialsError::SaveFailed(message) | CredentialsError::ClearFailed(message) => {
                AuthError::CredentialsSaveFailed { message }.into()
            }
        }
    }
}

/// Trait for credentials storage and retrieval.
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// Load credentials from storage.
    ///
    /// `Ok(None)` means nothing is stored.
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError>;

    /// Save credentials to storage.
    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError>;

    /// Clear all stored credentials.
    async fn clear(&self) -> Result<(), CredentialsError>;
}
