//! Dataset persistence
//!
//! Provides file-based and memory-based implementations of [`TaskStore`].
//! A store only moves whole datasets in and out; it knows nothing about
//! ordering or archival rules.

mod json;
mod memory;

pub use json::JsonTaskStore;
pub use memory::MemoryTaskStore;

use crate::error::UpnextResult;
use crate::model::Dataset;

/// Load and save the full task dataset
pub trait TaskStore: Send + Sync {
    /// Load the dataset; an empty version-1 dataset when nothing is stored yet
    fn load(&self) -> UpnextResult<Dataset>;

    /// Replace the stored dataset with `data`
    fn save(&self, data: &Dataset) -> UpnextResult<()>;
}
