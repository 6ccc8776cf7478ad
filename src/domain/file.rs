//! File entities and the read/write capability split.
//!
//! Write capability is strictly additive to read: [`WritableFile`] extends
//! [`ReadableFile`], and a type that cannot persist implements the readable
//! trait alone. No `&dyn WritableFile` can ever point at a [`ReadOnlySqlFile`].

use crate::domain::ports::BackingStore;
use crate::error::StoreError;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Read capability: a backing-store path plus the text cached from the last
/// load.
pub trait ReadableFile: Send + Sync {
    /// Backing-store path this entity is bound to.
    fn file_path(&self) -> &Path;

    /// Text cached by the last successful [`load_text`](Self::load_text),
    /// empty before the first load.
    fn file_text(&self) -> &str;

    /// Refresh the cache from the backing store and return the loaded text.
    fn load_text(&mut self) -> Result<String, StoreError>;
}

/// Write capability, strictly additive to [`ReadableFile`].
pub trait WritableFile: ReadableFile {
    /// Replace the cached text without touching the backing store.
    fn set_text(&mut self, text: String);

    /// Persist the cached text to the backing store.
    fn save_text(&self) -> Result<(), StoreError>;
}

/// SQL script file with full read/write access.
pub struct SqlFile {
    path: PathBuf,
    text: String,
    store: Arc<dyn BackingStore>,
}

impl SqlFile {
    pub fn new(path: impl Into<PathBuf>, store: Arc<dyn BackingStore>) -> Self {
        Self {
            path: path.into(),
            text: String::new(),
            store,
        }
    }

    /// Seed the cache without going through the backing store.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

impl ReadableFile for SqlFile {
    fn file_path(&self) -> &Path {
        &self.path
    }

    fn file_text(&self) -> &str {
        &self.text
    }

    fn load_text(&mut self) -> Result<String, StoreError> {
        let text = self.store.load(&self.path)?;
        self.text = text.clone();
        Ok(text)
    }
}

impl WritableFile for SqlFile {
    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn save_text(&self) -> Result<(), StoreError> {
        self.store.save(&self.path, &self.text)
    }
}

/// SQL script file that can only be loaded.
///
/// No save operation exists on this type:
///
/// ```compile_fail
/// use std::sync::Arc;
/// use sqlcrew::adapters::memory::MemoryStore;
/// use sqlcrew::domain::file::ReadOnlySqlFile;
///
/// let store = Arc::new(MemoryStore::new().with_file("a.sql", "select 1;"));
/// let file = ReadOnlySqlFile::new("a.sql", store);
/// file.save_text();
/// ```
pub struct ReadOnlySqlFile {
    path: PathBuf,
    text: String,
    store: Arc<dyn BackingStore>,
}

impl ReadOnlySqlFile {
    pub fn new(path: impl Into<PathBuf>, store: Arc<dyn BackingStore>) -> Self {
        Self {
            path: path.into(),
            text: String::new(),
            store,
        }
    }
}

impl ReadableFile for ReadOnlySqlFile {
    fn file_path(&self) -> &Path {
        &self.path
    }

    fn file_text(&self) -> &str {
        &self.text
    }

    fn load_text(&mut self) -> Result<String, StoreError> {
        let text = self.store.load(&self.path)?;
        self.text = text.clone();
        Ok(text)
    }
}
