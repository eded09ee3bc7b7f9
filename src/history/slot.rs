use std::fs;
use std::io::ErrorKind;
use std::path::{ Path, PathBuf };
use std::sync::{ Arc, Mutex };

use crate::error::StorageError;

/// A single key of a persistent key-value store.
pub trait StorageSlot: Send + Sync {
    fn read(&self) -> Result<Option<String>, StorageError>;

    fn write(&self, blob: &str) -> Result<(), StorageError>;
}

/// Stores the slot as `<dir>/<key>.json`.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, blob: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // rename keeps the slot at either the old or the new blob
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory slot. Clones share the same cell.
#[derive(Clone, Default)]
pub struct MemorySlot {
    cell: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            cell: Arc::new(Mutex::new(Some(blob.into()))),
        }
    }

    pub fn snapshot(&self) -> Option<String> {
        self.cell
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.snapshot())
    }

    fn write(&self, blob: &str) -> Result<(), StorageError> {
        let mut guard = self.cell.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_slot_missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path(), "history");
        assert!(slot.read().unwrap().is_none());
    }

    #[test]
    fn file_slot_creates_directory_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("nested"), "history");
        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
        assert!(slot.path().ends_with("nested/history.json"));
    }

    #[test]
    fn memory_slot_clones_share_state() {
        let slot = MemorySlot::new();
        let other = slot.clone();
        slot.write("[1]").unwrap();
        assert_eq!(other.read().unwrap().as_deref(), Some("[1]"));
    }
}
