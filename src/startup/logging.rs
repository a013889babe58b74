//! File logging setup.
//!
//! The terminal belongs to the TUI, so log lines go to `<data dir>/crm.log`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use super::config::{CrmConfig, DEFAULT_LOG_FILTER};
use crate::error::{classify_io_error, CrmResult, SystemError};

/// Parse a filter directive, falling back to the default on bad input.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn open_log(path: &Path) -> CrmResult<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| SystemError::DirectoryCreationFailed {
            path: parent.to_path_buf(),
            message: err.to_string(),
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| classify_io_error(err, Some(path.to_path_buf()), "open"))?;
    Ok(file)
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(config: &CrmConfig) -> CrmResult<()> {
    let file = open_log(&config.log_path())?;
    let _ = tracing_subscriber::registry()
        .with(build_filter(&config.log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .try_init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), api = %config.api_url, "crm starting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bad_directive_falls_back() {
        let filter = build_filter("crm=[[[");
        assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_open_log_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("crm.log");
        open_log(&path).unwrap();
        assert!(path.exists());
    }
}
