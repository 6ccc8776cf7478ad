use crate::error::StoreError;
use std::path::Path;

/// Backing store port (implemented by Infrastructure).
///
/// The store holds plain text addressed by path. What actually sits behind it
/// (local disk, an in-memory map) is an adapter concern.
pub trait BackingStore: Send + Sync {
    /// Load the full text stored under `path`.
    fn load(&self, path: &Path) -> Result<String, StoreError>;

    /// Persist `text` under `path`, replacing any previous content.
    fn save(&self, path: &Path, text: &str) -> Result<(), StoreError>;
}
