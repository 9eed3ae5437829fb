//! Todo Models
//!
//! Wire structures for the remote TODO collection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Priority levels accepted by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

/// Todo record as returned by the server
///
/// `id`, `is_deleted` and the timestamps are owned by the server; the client
/// never sends them (see [`TodoDraft`] and [`TodoPatch`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body of `POST /v1/todos`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TodoDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Body of `PUT /v1/todos/{id}`. Unset fields are not serialized.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl TodoPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_minimal_todo() {
        let todo: Todo = serde_json::from_value(json!({ "_id": "a1", "title": "Buy milk" })).unwrap();
        assert_eq!(todo.id, "a1");
        assert!(!todo.completed);
        assert_eq!(todo.priority, None);
        assert_eq!(todo.created_at, None);
    }

    #[test]
    fn test_decode_full_todo() {
        let todo: Todo = serde_json::from_value(json!({
            "_id": "a2",
            "title": "Ship it",
            "description": "release 1.0",
            "completed": true,
            "due_date": "2025-01-31T00:00:00Z",
            "priority": "high",
            "is_deleted": false,
            "created_at": "2025-01-01T10:00:00Z",
            "updated_at": "2025-01-02T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(todo.priority, Some(Priority::High));
        assert_eq!(todo.is_deleted, Some(false));
        assert_eq!(todo.due_date.as_deref(), Some("2025-01-31T00:00:00Z"));
    }

    #[test]
    fn test_id_alias() {
        let todo: Todo = serde_json::from_value(json!({ "id": "x", "title": "t" })).unwrap();
        assert_eq!(todo.id, "x");
    }

    #[test]
    fn test_draft_omits_server_fields() {
        let body = serde_json::to_value(TodoDraft::new("Write tests").priority(Priority::Low)).unwrap();
        assert_eq!(body, json!({ "title": "Write tests", "completed": false, "priority": "low" }));
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let body = serde_json::to_value(TodoPatch::default().completed(true)).unwrap();
        assert_eq!(body, json!({ "completed": true }));
        assert!(TodoPatch::default().is_empty());
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("medium".parse::<Priority>(), Ok(Priority::Medium));
        assert!("urgent".parse::<Priority>().is_err());
    }
}
