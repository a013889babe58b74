//! Credentials storage and management.
//!
//! Stores the login token and user record in `.credentials.json` under the
//! client's data directory (`~/.crm` unless overridden).

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::models::{EntityId, UserRole};

/// The default data directory name under `$HOME`.
pub const DATA_DIR: &str = ".crm";

/// The credentials file name.
const CREDENTIALS_FILE: &str = ".credentials.json";

/// The signed-in user as returned by the login endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, alias = "fullName")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

/// Authentication credentials for the CRM backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    /// Bearer token attached to every API request.
    pub token: Option<String>,
    /// The authenticated user.
    pub user: Option<SessionUser>,
}

impl Credentials {
    /// Create new empty credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credentials for a fresh login.
    pub fn signed_in(token: impl Into<String>, user: Option<SessionUser>) -> Self {
        Self {
            token: Some(token.into()),
            user,
        }
    }

    /// Check if the credentials have a non-empty token.
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Whether nothing at all is stored.
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user.is_none()
    }

    /// Display name of the signed-in user, if known.
    pub fn display_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|u| if u.name.is_empty() { u.email.as_str() } else { u.name.as_str() })
            .filter(|n| !n.is_empty())
    }
}

/// Manages credential storage and retrieval.
#[derive(Debug, Clone)]
pub struct CredentialsManager {
    /// Path to the credentials file.
    credentials_path: PathBuf,
}

impl CredentialsManager {
    /// Create a manager storing credentials under `~/.crm`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::in_dir(home.join(DATA_DIR)))
    }

    /// Create a manager storing credentials in `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            credentials_path: data_dir.as_ref().join(CREDENTIALS_FILE),
        }
    }

    /// Get the path to the credentials file.
    pub fn credentials_path(&self) -> &PathBuf {
        &self.credentials_path
    }

    /// Load credentials from the credentials file.
    ///
    /// Returns default credentials if the file doesn't exist or can't be read.
    pub fn load(&self) -> Credentials {
        if !self.credentials_path.exists() {
            return Credentials::default();
        }

        let file = match File::open(&self.credentials_path) {
            Ok(f) => f,
            Err(err) => {
                tracing::warn!(path = %self.credentials_path.display(), error = %err, "cannot open credentials");
                return Credentials::default();
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(creds) => creds,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed credentials file");
                Credentials::default()
            }
        }
    }

    /// Save credentials to the credentials file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, credentials: &Credentials) -> std::io::Result<()> {
        if let Some(parent) = self.credentials_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&self.credentials_path)?);
        serde_json::to_writer_pretty(&mut writer, credentials)?;
        writer.flush()
    }

    /// Remove the credentials file. A missing file is not an error.
    pub fn clear(&self) -> std::io::Result<()> {
        if !self.credentials_path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.credentials_path)
    }
}
