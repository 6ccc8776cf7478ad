use crate::domain::ports::BackingStore;
use crate::error::StoreError;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem-backed store rooted at a directory.
///
/// Entity paths are resolved relative to the root; errors report the entity
/// path, not the resolved one.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

fn load_error(path: &Path, err: io::Error) -> StoreError {
    match err.kind() {
        io::ErrorKind::NotFound => StoreError::NotFound {
            path: path.to_path_buf(),
        },
        io::ErrorKind::PermissionDenied => StoreError::ReadDenied {
            path: path.to_path_buf(),
        },
        _ => StoreError::Unavailable {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

fn save_error(path: &Path, err: io::Error) -> StoreError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => StoreError::WriteDenied {
            path: path.to_path_buf(),
        },
        _ => StoreError::Unavailable {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

impl BackingStore for FsStore {
    fn load(&self, path: &Path) -> Result<String, StoreError> {
        let full = self.resolve(path);
        tracing::debug!(path = %full.display(), "loading file");
        std::fs::read_to_string(&full).map_err(|err| load_error(path, err))
    }

    fn save(&self, path: &Path, text: &str) -> Result<(), StoreError> {
        let full = self.resolve(path);
        tracing::debug!(path = %full.display(), bytes = text.len(), "saving file");
        std::fs::write(&full, text).map_err(|err| save_error(path, err))
    }
}
