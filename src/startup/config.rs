//! Runtime configuration.
//!
//! Built from defaults, then `CRM_*` environment variables, then CLI flags.

use std::path::{Path, PathBuf};

use crate::api::client::DEFAULT_API_URL;
use crate::auth::credentials::DATA_DIR;
use crate::error::{ConfigError, CrmResult, SystemError};

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "crm=info";

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "crm.log";

/// Configuration for one run of the client.
///
/// ```ignore
/// let config = CrmConfig::from_env()?.with_api_url("http://crm.internal/api");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CrmConfig {
    /// REST base URL, without a trailing slash.
    pub api_url: String,
    /// Holds `.credentials.json` and the log file.
    pub data_dir: PathBuf,
    /// Where exported spreadsheets are written.
    pub export_dir: PathBuf,
    /// `EnvFilter` directive.
    pub log_filter: String,
}

impl CrmConfig {
    /// Defaults rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            export_dir: data_dir.join("exports"),
            data_dir,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Defaults rooted at `~/.crm`.
    pub fn new() -> CrmResult<Self> {
        let home = dirs::home_dir().ok_or(SystemError::NoHomeDirectory)?;
        Ok(Self::with_data_dir(home.join(DATA_DIR)))
    }

    /// Defaults overlaid with `CRM_HOME`, `CRM_API_URL`, `CRM_EXPORT_DIR`
    /// and `CRM_LOG`.
    pub fn from_env() -> CrmResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> CrmResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = match get("CRM_HOME") {
            Some(home) => Self::with_data_dir(home),
            None => Self::new()?,
        };
        if let Some(url) = get("CRM_API_URL") {
            config = config.with_api_url(url);
        }
        if let Some(dir) = get("CRM_EXPORT_DIR") {
            config = config.with_export_dir(dir);
        }
        if let Some(filter) = get("CRM_LOG") {
            config = config.with_log_filter(filter);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// The base URL must be absolute http(s).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.starts_with("http://") || self.api_url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                key: "CRM_API_URL".to_string(),
                value: self.api_url.clone(),
                message: "must start with http:// or https://".to_string(),
            })
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CrmConfig::with_data_dir("/tmp/crm-home");
        assert_eq!(config.api_url, "http://localhost:8080/api");
        assert_eq!(config.export_dir, PathBuf::from("/tmp/crm-home/exports"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/crm-home/crm.log"));
        assert_eq!(config.log_filter, "crm=info");
    }

    #[test]
    fn test_env_overrides() {
        let config = CrmConfig::from_lookup(lookup(&[
            ("CRM_HOME", "/srv/crm"),
            ("CRM_API_URL", "https://crm.example.vn/api/"),
            ("CRM_EXPORT_DIR", "/srv/exports"),
            ("CRM_LOG", "crm=debug"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/crm"));
        assert_eq!(config.api_url, "https://crm.example.vn/api");
        assert_eq!(config.export_dir, PathBuf::from("/srv/exports"));
        assert_eq!(config.log_filter, "crm=debug");
    }

    #[test]
    fn test_blank_values_ignored() {
        let config =
            CrmConfig::from_lookup(lookup(&[("CRM_HOME", "/x"), ("CRM_API_URL", "  ")])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = CrmConfig::from_lookup(lookup(&[("CRM_HOME", "/x"), ("CRM_API_URL", "crm.local")]))
            .unwrap_err();
        assert_eq!(err.error_code(), "E_CFG_INVALID");
    }
}
