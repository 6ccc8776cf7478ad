use std::io;
use std::path::{Path, PathBuf};

/// Backing-store failure taxonomy.
///
/// There is no "operation unsupported" kind here: an entity that cannot
/// perform an operation does not expose it, so the case cannot arise.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No content exists under the requested path.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// The backing store refused to read the path.
    #[error("read denied: {path}")]
    ReadDenied { path: PathBuf },

    /// The backing store refused to write the path.
    #[error("write denied: {path}")]
    WriteDenied { path: PathBuf },

    /// The backing store itself could not be reached.
    #[error("backing store unavailable: {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Path the failing operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            StoreError::NotFound { path }
            | StoreError::ReadDenied { path }
            | StoreError::WriteDenied { path }
            | StoreError::Unavailable { path, .. } => path,
        }
    }
}
