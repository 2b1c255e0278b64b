//! Snapshot persistence for the to-do list.
//!
//! The entire list is serialized as one JSON array and written to a single
//! file (default: `<data_dir>/quickdo/todos.json`). Loading is forgiving:
//! a missing or malformed snapshot yields an empty list rather than an
//! error, so the application always starts.

pub mod model;

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

pub use model::{TodoItem, TodoList};

/// Default snapshot location under the platform data directory.
pub fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quickdo")
        .join("todos.json")
}

/// Owns the snapshot file path and mediates all reads and writes to it.
///
/// Constructed once at startup and passed explicitly to whoever needs it;
/// there is no ambient or global store.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot. A missing file is the normal first-run case and
    /// yields an empty list; unreadable or malformed content is logged and
    /// also yields an empty list. Never fails visibly.
    pub fn load(&self) -> TodoList {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return TodoList::new(),
            Err(e) => {
                warn!("could not read snapshot {}: {}", self.path.display(), e);
                return TodoList::new();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(list) => list,
            Err(e) => {
                warn!(
                    "malformed snapshot {}: {}; starting with an empty list",
                    self.path.display(),
                    e
                );
                TodoList::new()
            }
        }
    }

    /// Serialize the whole list and overwrite the snapshot in one
    /// synchronous write.
    pub fn save(&self, list: &TodoList) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string(list).context("Failed to serialize to-do list")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write snapshot to {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("todos.json"));
        (dir, store)
    }

    #[test]
    fn missing_snapshot_loads_as_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn malformed_snapshot_loads_as_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "not json at all {{{").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = temp_store();
        let mut list = TodoList::new();
        list.add("Buy milk");
        list.add("Walk dog");
        list.set_completed(0, true);

        store.save(&list).unwrap();
        assert_eq!(store.load(), list);
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let (_dir, store) = temp_store();
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        store.save(&list).unwrap();

        list.remove(0);
        store.save(&list).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(0).unwrap().text, "b");
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("nested").join("deep").join("todos.json"));
        let mut list = TodoList::new();
        list.add("task");
        store.save(&list).unwrap();
        assert_eq!(store.load(), list);
    }

    // The full lifecycle from the original app: add, complete, add another,
    // delete the first, then reload from disk as if the app restarted.
    #[test]
    fn end_to_end_mutations_survive_reload() {
        let (_dir, store) = temp_store();
        let mut list = store.load();
        assert!(list.is_empty());

        list.add("Buy milk");
        store.save(&list).unwrap();
        assert_eq!(list.get(0).unwrap().text, "Buy milk");
        assert!(!list.get(0).unwrap().completed);

        list.set_completed(0, true);
        store.save(&list).unwrap();
        assert!(list.get(0).unwrap().completed);

        list.add("Walk dog");
        store.save(&list).unwrap();
        assert_eq!(list.len(), 2);

        list.remove(0);
        store.save(&list).unwrap();

        let reloaded = store.load();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get(0).unwrap().text, "Walk dog");
        assert!(!reloaded.get(0).unwrap().completed);
    }
}
