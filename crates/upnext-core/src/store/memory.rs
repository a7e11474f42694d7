//! In-memory store

use super::TaskStore;
use crate::error::{UpnextError, UpnextResult};
use crate::model::Dataset;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Shared in-process store.
///
/// Clones share the same dataset, so a test can hand one clone to a
/// session and inspect what was saved through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryTaskStore {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    data: Mutex<Dataset>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with `data`
    pub fn with_dataset(data: Dataset) -> Self {
        let store = Self::new();
        *store.inner.data.lock() = data;
        store
    }

    /// Last saved (or preloaded) dataset
    pub fn snapshot(&self) -> Dataset {
        self.inner.data.lock().clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.inner.saves.load(Ordering::SeqCst)
    }

    /// Make subsequent saves fail with `StorageUnavailable`
    pub fn set_fail_saves(&self, fail: bool) {
        self.inner.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl TaskStore for MemoryTaskStore {
    fn load(&self) -> UpnextResult<Dataset> {
        let mut data = self.snapshot();
        data.reindex_positions();
        Ok(data)
    }

    fn save(&self, data: &Dataset) -> UpnextResult<()> {
        if self.inner.fail_saves.load(Ordering::SeqCst) {
            return Err(UpnextError::storage_unavailable(
                "memory store is configured to fail saves",
                None,
            ));
        }
        *self.inner.data.lock() = data.clone();
        self.inner.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
