//! JSON file store
//!
//! Writes go to `<file>.tmp`, are fsynced, then renamed over the data file
//! so readers never observe a partial document.

use super::TaskStore;
use crate::config::default_data_path;
use crate::error::{UpnextError, UpnextResult};
use crate::model::Dataset;
use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File-backed task store
#[derive(Debug, Clone)]
pub struct JsonTaskStore {
    path: PathBuf,
}

impl JsonTaskStore {
    /// Store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default data location
    pub fn at_default_location() -> UpnextResult<Self> {
        Ok(Self::new(default_data_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }
}

impl TaskStore for JsonTaskStore {
    fn load(&self) -> UpnextResult<Dataset> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", self.path.display());
                return Ok(Dataset::new());
            }
            Err(e) => {
                return Err(UpnextError::io_with_path(
                    format!("Failed to read data file: {}", e),
                    self.path_string(),
                ));
            }
        };

        let mut data: Dataset = serde_json::from_str(&content)
            .map_err(|e| UpnextError::storage_corrupt(e.to_string(), self.path_string()))?;

        if data.reindex_positions() {
            debug!("Normalized task positions after load");
        }

        debug!(
            items = data.items.len(),
            archived = data.archive.len(),
            "Loaded dataset from {}",
            self.path.display()
        );
        Ok(data)
    }

    fn save(&self, data: &Dataset) -> UpnextResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    UpnextError::storage_unavailable(
                        format!("Failed to create data directory: {}", e),
                        Some(parent.display().to_string()),
                    )
                })?;
            }
        }

        let json = serde_json::to_string_pretty(data)?;
        let temp_path = self.temp_path();

        let write_temp = || -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()
        };
        if let Err(e) = write_temp() {
            let _ = fs::remove_file(&temp_path);
            return Err(UpnextError::io_with_path(
                format!("Failed to write data file: {}", e),
                temp_path.display().to_string(),
            ));
        }

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(UpnextError::io_with_path(
                format!("Failed to replace data file: {}", e),
                self.path_string(),
            ));
        }

        info!(items = data.items.len(), "Saved dataset to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewTodo, Priority};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonTaskStore {
        JsonTaskStore::new(dir.path().join("upnext").join("todos.json"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let data = store_in(&dir).load().unwrap();
        assert_eq!(data, Dataset::new());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut data = Dataset::new();
        data.add(NewTodo::new("write docs").with_priority(Priority::High));
        data.add(
            NewTodo::new("fix login")
                .with_description("session expiry")
                .with_context("/srv/app"),
        );
        let id = data.items[1].id.clone();
        data.complete(&id);

        store.save(&data).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&Dataset::new()).unwrap();

        assert!(store.path().exists());
        assert!(!store.temp_path().exists());
        let names: Vec<_> = fs::read_dir(store.path().parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![OsString::from("todos.json")]);
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let store = JsonTaskStore::new(dir.path().join("todos.json"));
        fs::write(store.path(), "{ this is not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(err.is_corrupt_storage());
        // untouched
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "{ this is not json"
        );
    }

    #[test]
    fn test_load_repairs_position_gaps() {
        let dir = TempDir::new().unwrap();
        let store = JsonTaskStore::new(dir.path().join("todos.json"));
        fs::write(
            store.path(),
            r#"{
              "version": 1,
              "items": [
                {"id": "a", "text": "one", "priority": 1, "created": "2024-01-01T00:00:00Z", "position": 0},
                {"id": "b", "text": "two", "priority": 2, "created": "2024-01-02T00:00:00Z", "position": 3, "context": "/w"}
              ],
              "archive": null,
              "stats": {"total_completed": 7, "streak_days": 0}
            }"#,
        )
        .unwrap();

        let data = store.load().unwrap();
        assert_eq!(data.items.len(), 2);
        assert_eq!(data.items[1].position, 1);
        assert_eq!(data.items[1].context, "/w");
        assert!(data.archive.is_empty());
        assert_eq!(data.stats.total_completed, 7);
    }

    #[test]
    fn test_unwritable_directory_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let store = JsonTaskStore::new(blocker.join("todos.json"));
        let err = store.save(&Dataset::new()).unwrap_err();
        assert!(matches!(err, UpnextError::StorageUnavailable { .. }));
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let dir = TempDir::new().unwrap();
        let store = JsonTaskStore::new(dir.path().join("todos.json"));
        let mut data = Dataset::new();
        data.add(NewTodo::new("plain"));
        store.save(&data).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(!raw.contains("\"description\""));
        assert!(!raw.contains("\"context\""));
        assert!(raw.contains("\"priority\": 1"));
    }
}
