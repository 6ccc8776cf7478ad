use crate::domain::ports::BackingStore;
use crate::error::StoreError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// In-memory backing store.
///
/// Construct with [`read_only`](Self::read_only) to get a store that refuses
/// every save with [`StoreError::WriteDenied`]. Seeding through
/// [`with_file`](Self::with_file) bypasses that flag.
pub struct MemoryStore {
    files: RwLock<HashMap<PathBuf, String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            read_only: false,
        }
    }

    /// Store that refuses every save.
    pub fn read_only() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            read_only: true,
        }
    }

    /// Builder-style seeding.
    pub fn with_file(self, path: impl AsRef<Path>, text: impl Into<String>) -> Self {
        {
            let mut files = self.files.write().unwrap();
            files.insert(path.as_ref().to_path_buf(), text.into());
        }
        self
    }

    /// Current content under `path`, if any. Intended for assertions.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.read().unwrap().get(path.as_ref()).cloned()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BackingStore for MemoryStore {
    fn load(&self, path: &Path) -> Result<String, StoreError> {
        self.files
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn save(&self, path: &Path, text: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::WriteDenied {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(path = %path.display(), bytes = text.len(), "storing text");
        self.files
            .write()
            .unwrap()
            .insert(path.to_path_buf(), text.to_string());
        Ok(())
    }
}
