use crate::errors::CotError;
use std::path::PathBuf;

/// Problems with the file arguments. These are reported as usage errors.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("can't open '{path}': No such file or directory")]
    NotFound { path: PathBuf },

    #[error("can't open '{path}': Is a directory")]
    IsDirectory { path: PathBuf },

    #[error("can't open '{path}': path is not valid UTF-8")]
    NonUtf8Path { path: PathBuf },

    #[error("can't open '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can't create directory '{path}': {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can't create '{path}': {source}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can't determine current directory: {source}")]
    CurrentDirUnavailable {
        #[source]
        source: std::io::Error,
    },
}

impl CotError for FileError {
    fn error_code(&self) -> &'static str {
        match self {
            FileError::NotFound { .. } => "FILE_NOT_FOUND",
            FileError::IsDirectory { .. } => "FILE_IS_DIRECTORY",
            FileError::NonUtf8Path { .. } => "FILE_PATH_NOT_UTF8",
            FileError::Unreadable { .. } => "FILE_UNREADABLE",
            FileError::CreateDirectoryFailed { .. } => "DIRECTORY_CREATE_FAILED",
            FileError::CreateFailed { .. } => "FILE_CREATE_FAILED",
            FileError::CurrentDirUnavailable { .. } => "CURRENT_DIR_UNAVAILABLE",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, FileError::CurrentDirUnavailable { .. })
    }
}
