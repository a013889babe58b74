//! File-based credentials provider adapter.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::auth::credentials::{Credentials, CredentialsManager};
use crate::traits::{CredentialsError, CredentialsProvider};

/// Credentials provider backed by `.credentials.json` in the data directory.
#[derive(Debug, Clone)]
pub struct FileCredentialsProvider {
    manager: CredentialsManager,
}

impl FileCredentialsProvider {
    /// Create a provider storing credentials in `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            manager: CredentialsManager::in_dir(data_dir),
        }
    }

    /// Get a reference to the underlying credentials manager.
    pub fn manager(&self) -> &CredentialsManager {
        &self.manager
    }

    /// Get the path to the credentials file.
    pub fn credentials_path(&self) -> &PathBuf {
        self.manager.credentials_path()
    }
}

#[async_trait]
impl CredentialsProvider for FileCredentialsProvider {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        let creds = self.manager.load();
        if creds.is_empty() {
            Ok(None)
        } else {
            Ok(Some(creds))
        }
    }

    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError> {
        self.manager
            .save(creds)
            .map_err(|e| CredentialsError::SaveFailed(e.to_string()))
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        self.manager
            .clear()
            .map_err(|e| CredentialsError::ClearFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_empty_store_loads_none() {
        let dir = TempDir::new().unwrap();
        let provider = FileCredentialsProvider::new(dir.path());
        assert_eq!(provider.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_load_clear() {
        let dir = TempDir::new().unwrap();
        let provider = FileCredentialsProvider::new(dir.path());
        let creds = Credentials::signed_in("tok", None);

        provider.save(&creds).await.unwrap();
        assert_eq!(provider.load().await.unwrap(), Some(creds));
        assert!(provider.credentials_path().ends_with(".credentials.json"));

        provider.clear().await.unwrap();
        assert_eq!(provider.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_into_unwritable_location_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        // Parent of the credentials file is a regular file.
        let provider = FileCredentialsProvider::new(&blocker);
        let err = provider.save(&Credentials::signed_in("t", None)).await;
        assert!(matches!(err, Err(CredentialsError::SaveFailed(_))));
    }
}
