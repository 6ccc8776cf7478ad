//! Bulk operations over externally assembled file collections.

use crate::domain::file::{ReadableFile, WritableFile};
use anyhow::{Context as _, Result};

/// Aggregates SQL files for bulk reads and writes.
///
/// Both collections are supplied by the owner; the manager never discovers or
/// constructs files itself. Bulk operations fail fast: the first failing file
/// aborts the pass, and files earlier in the order keep whatever already
/// happened (cached loads, completed saves).
pub struct SqlFileManager {
    all_files: Vec<Box<dyn ReadableFile>>,
    writable_files: Vec<Box<dyn WritableFile>>,
}

impl SqlFileManager {
    pub fn new() -> Self {
        Self {
            all_files: Vec::new(),
            writable_files: Vec::new(),
        }
    }

    pub fn with_files(
        all_files: Vec<Box<dyn ReadableFile>>,
        writable_files: Vec<Box<dyn WritableFile>>,
    ) -> Self {
        Self {
            all_files,
            writable_files,
        }
    }

    pub fn add_readable(&mut self, file: Box<dyn ReadableFile>) {
        self.all_files.push(file);
    }

    pub fn add_writable(&mut self, file: Box<dyn WritableFile>) {
        self.writable_files.push(file);
    }

    pub fn readable_count(&self) -> usize {
        self.all_files.len()
    }

    pub fn writable_count(&self) -> usize {
        self.writable_files.len()
    }

    /// Load every readable file in collection order and concatenate the
    /// loaded texts.
    pub fn read_all(&mut self) -> Result<String> {
        let mut combined = String::new();
        for file in self.all_files.iter_mut() {
            let text = file
                .load_text()
                .with_context(|| format!("failed to load {}", file.file_path().display()))?;
            tracing::debug!(path = %file.file_path().display(), bytes = text.len(), "loaded");
            combined.push_str(&text);
        }
        tracing::info!(
            files = self.all_files.len(),
            bytes = combined.len(),
            "bulk read complete"
        );
        Ok(combined)
    }

    /// Save every writable file in collection order.
    pub fn write_all(&self) -> Result<()> {
        for file in &self.writable_files {
            file.save_text()
                .with_context(|| format!("failed to save {}", file.file_path().display()))?;
            tracing::debug!(path = %file.file_path().display(), "saved");
        }
        tracing::info!(files = self.writable_files.len(), "bulk write complete");
        Ok(())
    }
}

impl Default for SqlFileManager {
    fn default() -> Self {
        Self::new()
    }
}
