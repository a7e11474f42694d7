//! The persisted dataset

use super::todo::{ArchivedTodo, Todo};
use crate::context::is_relevant;
use serde::{Deserialize, Deserializer, Serialize};

/// Current on-disk format version
pub const DATASET_VERSION: u32 = 1;

/// Completion metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Lifetime completions. Only ever increases.
    #[serde(default)]
    pub total_completed: u64,
    #[serde(default)]
    pub streak_days: u32,
}

/// Root structure for persisted data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub version: u32,
    /// Active tasks in display order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Todo>,
    /// Completed tasks, oldest completion first
    #[serde(default, deserialize_with = "null_as_empty")]
    pub archive: Vec<ArchivedTodo>,
    #[serde(default)]
    pub stats: Stats,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self {
            version: DATASET_VERSION,
            items: Vec::new(),
            archive: Vec::new(),
            stats: Stats::default(),
        }
    }

    /// Indices of active tasks relevant to `cwd`, in list order
    pub fn relevant_items(&self, cwd: &str) -> Vec<usize> {
        relevant_indices(self.items.iter().map(|item| item.context.as_str()), cwd)
    }

    /// Indices of archived tasks relevant to `cwd`, in completion order
    pub fn relevant_archive(&self, cwd: &str) -> Vec<usize> {
        relevant_indices(self.archive.iter().map(|item| item.context.as_str()), cwd)
    }

    pub fn find_todo(&self, id: &str) -> Option<&Todo> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Rewrite positions so they match list order.
    ///
    /// Returns true when any position changed.
    pub fn reindex_positions(&mut self) -> bool {
        let mut changed = false;
        for (index, item) in self.items.iter_mut().enumerate() {
            if item.position != index {
                item.position = index;
                changed = true;
            }
        }
        changed
    }

    /// True when positions are exactly `0..len` in list order
    pub fn positions_are_dense(&self) -> bool {
        self.items
            .iter()
            .enumerate()
            .all(|(index, item)| item.position == index)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn relevant_indices<'a>(contexts: impl Iterator<Item = &'a str>, cwd: &str) -> Vec<usize> {
    contexts
        .enumerate()
        .filter(|(_, context)| is_relevant(context, cwd))
        .map(|(index, _)| index)
        .collect()
}
