use super::{Snapshot, SnapshotStore};
use crate::book::AddressBook;
use crate::error::{AddrBookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Snapshot file on disk. The path is fixed at construction.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AddrBookError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("addressbook");
        self.path
            .with_file_name(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no snapshot yet, starting empty");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(AddrBookError::Io)?;
        let snapshot = Snapshot::decode(&content)?;
        debug!(
            path = %self.path.display(),
            contacts = snapshot.contacts.len(),
            saved_at = %snapshot.saved_at,
            "snapshot loaded"
        );
        Ok(snapshot.contacts)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let content = Snapshot::new(book).encode()?;

        // Atomic write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(AddrBookError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                warn!(path = %tmp_path.display(), error = %cleanup, "could not remove temp snapshot");
            }
            return Err(AddrBookError::Io(e));
        }

        info!(path = %self.path.display(), contacts = book.len(), "snapshot saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("book.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_dirs_and_leaves_no_tmp() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("book.json");
        let mut store = FileStore::new(&path);

        let mut book = AddressBook::new();
        book.add_or_update("alice", "1234567890").unwrap();
        store.save(&book).unwrap();

        assert!(path.exists());
        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("book.json"));

        let mut first = AddressBook::new();
        first.add_or_update("alice", "1234567890").unwrap();
        first.add_or_update("bob", "1234567890").unwrap();
        store.save(&first).unwrap();

        let mut second = AddressBook::new();
        second.add_or_update("carol", "0987654321").unwrap();
        store.save(&second).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, second);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("book.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(AddrBookError::Serialization(_))
        ));
    }

    #[test]
    fn failed_rename_leaves_no_tmp() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("book.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();
        let mut store = FileStore::new(&path);

        let mut book = AddressBook::new();
        book.add_or_update("alice", "1234567890").unwrap();
        assert!(matches!(store.save(&book), Err(AddrBookError::Io(_))));

        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
