//! Mock backing stores for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use sqlcrew::domain::ports::BackingStore;
use sqlcrew::error::StoreError;

/// Store that records every load and save attempt in invocation order, and
/// optionally fails all operations on one designated path.
pub struct RecordingStore {
    files: Mutex<HashMap<PathBuf, String>>,
    loads: Mutex<Vec<PathBuf>>,
    saves: Mutex<Vec<PathBuf>>,
    fail_on: Option<PathBuf>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            loads: Mutex::new(Vec::new()),
            saves: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    pub fn with_file(self, path: impl AsRef<Path>, text: impl Into<String>) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), text.into());
        self
    }

    /// Make every operation on `path` fail as if the store were unreachable.
    pub fn failing_on(mut self, path: impl AsRef<Path>) -> Self {
        self.fail_on = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn loaded_paths(&self) -> Vec<PathBuf> {
        self.loads.lock().unwrap().clone()
    }

    pub fn saved_paths(&self) -> Vec<PathBuf> {
        self.saves.lock().unwrap().clone()
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    fn unavailable(&self, path: &Path) -> Option<StoreError> {
        match &self.fail_on {
            Some(fail_on) if fail_on == path => Some(StoreError::Unavailable {
                path: path.to_path_buf(),
                source: io::Error::other("store offline"),
            }),
            _ => None,
        }
    }
}

impl Default for RecordingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BackingStore for RecordingStore {
    fn load(&self, path: &Path) -> Result<String, StoreError> {
        self.loads.lock().unwrap().push(path.to_path_buf());
        if let Some(err) = self.unavailable(path) {
            return Err(err);
        }
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn save(&self, path: &Path, text: &str) -> Result<(), StoreError> {
        self.saves.lock().unwrap().push(path.to_path_buf());
        if let Some(err) = self.unavailable(path) {
            return Err(err);
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), text.to_string());
        Ok(())
    }
}
