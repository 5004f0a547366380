use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::files::errors::FileError;
use crate::files::types::FileRequest;

/// Validate file arguments and turn them into absolute, symlink-free paths.
///
/// With `create_missing` (the `--new` flag with exactly one file), a file that
/// doesn't exist yet is created along with any missing parent directories.
/// Every other path must name an existing, readable file.
pub fn resolve_file_requests(
    paths: &[PathBuf],
    create_missing: bool,
    cwd: &Path,
) -> Result<Vec<FileRequest>, FileError> {
    let create_missing = create_missing && paths.len() == 1;
    paths
        .iter()
        .map(|path| resolve_file_request(&cwd.join(path), create_missing))
        .collect()
}

fn resolve_file_request(path: &Path, create_missing: bool) -> Result<FileRequest, FileError> {
    require_utf8(path)?;

    let must_exist = match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            return Err(FileError::IsDirectory {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => true,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if !create_missing {
                return Err(FileError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            create_file(path)?;
            false
        }
        Err(source) => {
            return Err(FileError::Unreadable {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    File::open(path).map_err(|source| FileError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let resolved = path
        .canonicalize()
        .map_err(|source| FileError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
    require_utf8(&resolved)?;

    Ok(FileRequest::new(resolved, must_exist))
}

/// Paths are embedded in scripts as text, so they must be valid UTF-8.
fn require_utf8(path: &Path) -> Result<(), FileError> {
    match path.to_str() {
        Some(_) => Ok(()),
        None => Err(FileError::NonUtf8Path {
            path: path.to_path_buf(),
        }),
    }
}

/// Create an empty file and its missing parent directories.
fn create_file(path: &Path) -> Result<(), FileError> {
    if let Some(parent) = path.parent() {
        match fs::create_dir_all(parent) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(source) => {
                return Err(FileError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source,
                });
            }
        }
    }

    File::create(path).map_err(|source| FileError::CreateFailed {
        path: path.to_path_buf(),
        source,
    })?;

    info!(event = "core.files.create_completed", path = %path.display());
    Ok(())
}
