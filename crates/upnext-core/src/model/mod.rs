//! Task data model
//!
//! Entities persisted in the data file: active [`Todo`]s, completed
//! [`ArchivedTodo`]s, aggregate [`Stats`], and the [`Dataset`] container.

mod dataset;
mod priority;
mod todo;

pub use dataset::{DATASET_VERSION, Dataset, Stats};
pub use priority::Priority;
pub use todo::{ArchivedTodo, NewTodo, Todo, generate_id};
