//! Active and archived task records

use super::priority::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a new unique task identifier
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// An active task in the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub priority: Priority,
    pub created: DateTime<Utc>,
    pub position: usize,
    /// Directory the task was created in; empty for global tasks
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub context: String,
}

impl Todo {
    /// True when the task is visible from every directory
    pub fn is_global(&self) -> bool {
        self.context.is_empty()
    }

    /// Convert into an archive record completed at `completed`
    pub fn into_archived(self, completed: DateTime<Utc>) -> ArchivedTodo {
        ArchivedTodo {
            id: self.id,
            text: self.text,
            description: self.description,
            priority: self.priority,
            created: self.created,
            completed,
            context: self.context,
        }
    }
}

/// A completed task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedTodo {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub priority: Priority,
    pub created: DateTime<Utc>,
    pub completed: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub context: String,
}

impl ArchivedTodo {
    /// Restore as an active task at the front of the list.
    ///
    /// Identifier and creation time are kept from the original task.
    pub fn into_active(self) -> Todo {
        Todo {
            id: self.id,
            text: self.text,
            description: self.description,
            priority: self.priority,
            created: self.created,
            position: 0,
            context: self.context,
        }
    }
}

/// Input for adding a task
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTodo {
    pub text: String,
    pub description: String,
    pub priority: Priority,
    pub context: String,
}

impl NewTodo {
    /// Global, medium-priority task with no description
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let todo = Todo {
            id: "1".to_string(),
            text: "write docs".to_string(),
            description: String::new(),
            priority: Priority::Low,
            created: Utc::now(),
            position: 0,
            context: String::new(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("context").is_none());
        assert_eq!(json["priority"], 0);
    }

    #[test]
    fn test_reads_record_without_optional_fields() {
        let json = r#"{"id":"20240101120000.000000001","text":"a","priority":2,
            "created":"2024-01-01T12:00:00.000000001+01:00","position":3}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.priority, Priority::High);
        assert!(todo.is_global());
        assert!(todo.description.is_empty());
        assert_eq!(todo.created.to_rfc3339(), "2024-01-01T11:00:00.000000001+00:00");
    }

    #[test]
    fn test_archive_and_restore_keep_identity() {
        let created = Utc::now();
        let todo = Todo {
            id: "abc".to_string(),
            text: "ship it".to_string(),
            description: "v1".to_string(),
            priority: Priority::High,
            created,
            position: 4,
            context: "/work".to_string(),
        };
        let archived = todo.clone().into_archived(Utc::now());
        assert_eq!(archived.id, "abc");
        let restored = archived.into_active();
        assert_eq!(restored.position, 0);
        assert_eq!(restored.created, created);
        assert_eq!(Todo { position: 4, ..restored }, todo);
    }
}
