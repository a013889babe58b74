//! Saving exported spreadsheets to disk.

use bytes::Bytes;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{classify_io_error, CrmResult, SystemError};
use crate::models::EntityKind;

/// Write an export blob to `<dir>/<resource>.xlsx`, creating `dir` if
/// needed. An existing file of the same name is replaced.
pub fn save_export(dir: &Path, kind: EntityKind, data: &Bytes) -> CrmResult<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|err| SystemError::DirectoryCreationFailed {
            path: dir.to_path_buf(),
            message: err.to_string(),
        })?;
    }
    let path = dir.join(kind.export_file_name());
    fs::write(&path, data).map_err(|err| classify_io_error(err, Some(path.clone()), "write"))?;
    tracing::info!(path = %path.display(), bytes = data.len(), "export saved");
    Ok(path)
}
