use std::path::{Path, PathBuf};

/// A file to hand to the editor.
///
/// `path` is absolute with symlinks resolved. `must_exist` is false only for a
/// file that `--new` created on the spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRequest {
    path: PathBuf,
    must_exist: bool,
}

impl FileRequest {
    pub fn new(path: PathBuf, must_exist: bool) -> Self {
        Self { path, must_exist }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn must_exist(&self) -> bool {
        self.must_exist
    }
}
