//! # upnext core
//!
//! Task model, directory relevance, operations, persistence and the
//! interactive session state machine behind the `upnext` command.
//!
//! ```no_run
//! use upnext_core::{Dataset, JsonTaskStore, NewTodo, TaskStore};
//!
//! let store = JsonTaskStore::new("/tmp/todos.json");
//! let mut data = store.load()?;
//! data.add(NewTodo::new("write release notes").with_context("/home/me/project"));
//! store.save(&data)?;
//! # Ok::<(), upnext_core::UpnextError>(())
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod ops;
pub mod session;
pub mod store;

pub use config::{Config, ConfigLoader};
pub use context::{display_context, is_relevant};
pub use error::{UnifiedError, UpnextError, UpnextResult, UserFriendlyError};
pub use model::{ArchivedTodo, Dataset, NewTodo, Priority, Stats, Todo};
pub use session::{Effect, Key, Mode, Session, SessionEvent, SessionOptions, Tab};
pub use store::{JsonTaskStore, MemoryTaskStore, TaskStore};
