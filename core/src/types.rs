//! Domain records for the todo API and their wire normalization.
//!
//! # Design
//! The remote service has been seen answering with both `Id`/`Title`/... and
//! `id`/`title`/... field names, sometimes both in one record. Reads go
//! through `WireTodo`, which keeps each casing separately and prefers the
//! capitalized value when it is present and non-null. Serialization always
//! emits the capitalized names the service expects on write. Everything past
//! this module only sees the canonical [`Todo`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// A single todo item as held by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireTodo")]
pub struct Todo {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "IsCompleted")]
    pub is_completed: bool,
}

/// A todo record exactly as it arrives, one slot per field casing.
/// Missing and null fields both read as `None`.
#[derive(Debug, Deserialize)]
struct WireTodo {
    #[serde(rename = "Id")]
    id_upper: Option<i64>,
    #[serde(rename = "id")]
    id_lower: Option<i64>,
    #[serde(rename = "Title")]
    title_upper: Option<String>,
    #[serde(rename = "title")]
    title_lower: Option<String>,
    #[serde(rename = "Description")]
    description_upper: Option<String>,
    #[serde(rename = "description")]
    description_lower: Option<String>,
    #[serde(rename = "IsCompleted")]
    is_completed_upper: Option<bool>,
    #[serde(rename = "isCompleted")]
    is_completed_lower: Option<bool>,
}

#[derive(Debug, Error)]
#[error("todo record has no integer `Id` or `id`")]
pub struct MissingId;

impl TryFrom<WireTodo> for Todo {
    type Error = MissingId;

    fn try_from(wire: WireTodo) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire.id_upper.or(wire.id_lower).ok_or(MissingId)?,
            title: wire.title_upper.or(wire.title_lower).unwrap_or_default(),
            description: wire
                .description_upper
                .or(wire.description_lower)
                .unwrap_or_default(),
            is_completed: wire
                .is_completed_upper
                .or(wire.is_completed_lower)
                .unwrap_or_default(),
        })
    }
}

impl Todo {
    /// Same record with the completion flag inverted.
    pub fn toggled(&self) -> Self {
        Self {
            is_completed: !self.is_completed,
            ..self.clone()
        }
    }
}

/// Request payload for creating a new todo. The service assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "IsCompleted", default)]
    pub is_completed: bool,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            is_completed: false,
        }
    }
}

/// Normalize a single wire object into a [`Todo`].
pub fn normalize_todo(value: Value) -> Result<Todo, serde_json::Error> {
    serde_json::from_value(value)
}

/// Normalize a wire list, skipping elements that are not valid records and
/// dropping repeated ids so the collection keeps one entry per id.
pub fn normalize_todos(values: Vec<Value>) -> Vec<Todo> {
    let mut seen = HashSet::with_capacity(values.len());
    let mut todos = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match normalize_todo(value) {
            Ok(todo) if seen.insert(todo.id) => todos.push(todo),
            Ok(todo) => warn!(id = todo.id, index, "dropping duplicate todo id"),
            Err(err) => warn!(index, error = %err, "skipping malformed todo record"),
        }
    }
    todos
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_capitalized_fields() {
        let todo = normalize_todo(json!({
            "Id": 7,
            "Title": "Buy milk",
            "Description": "2 litres",
            "IsCompleted": true
        }))
        .unwrap();
        assert_eq!(todo.id, 7);
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, "2 litres");
        assert!(todo.is_completed);
    }

    #[test]
    fn reads_lowercase_fields() {
        let todo = normalize_todo(json!({
            "id": 3,
            "title": "Walk",
            "description": "dog",
            "isCompleted": false
        }))
        .unwrap();
        assert_eq!(todo.id, 3);
        assert_eq!(todo.title, "Walk");
        assert!(!todo.is_completed);
    }

    #[test]
    fn missing_and_null_fields_fall_back_to_defaults() {
        let todo = normalize_todo(json!({"Id": 1, "Title": null})).unwrap();
        assert_eq!(todo.title, "");
        assert_eq!(todo.description, "");
        assert!(!todo.is_completed);
    }

    #[test]
    fn record_without_id_is_rejected() {
        assert!(normalize_todo(json!({"Title": "orphan"})).is_err());
    }

    #[test]
    fn record_with_both_casings_prefers_capitalized() {
        let todo = normalize_todo(json!({
            "Id": 5,
            "id": 5,
            "Title": "x",
            "title": "ignored",
            "isCompleted": true
        }))
        .unwrap();
        assert_eq!(todo.id, 5);
        assert_eq!(todo.title, "x");
        assert!(todo.is_completed);
    }

    #[test]
    fn null_capitalized_field_falls_back_to_lowercase() {
        let todo = normalize_todo(json!({
            "Id": null,
            "id": 5,
            "Title": null,
            "title": "walk",
            "Description": "kept"
        }))
        .unwrap();
        assert_eq!(todo.id, 5);
        assert_eq!(todo.title, "walk");
        assert_eq!(todo.description, "kept");
    }

    #[test]
    fn null_ids_in_both_casings_are_rejected() {
        assert!(normalize_todo(json!({"Id": null, "id": null, "Title": "x"})).is_err());
    }

    #[test]
    fn list_keeps_record_with_both_casings() {
        let todos = normalize_todos(vec![json!({"Id": 5, "id": 5, "Title": "x"})]);
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 5);
    }

    #[test]
    fn writes_capitalized_fields() {
        let todo = Todo {
            id: 4,
            title: "T".to_string(),
            description: "D".to_string(),
            is_completed: true,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            json!({"Id": 4, "Title": "T", "Description": "D", "IsCompleted": true})
        );
    }

    #[test]
    fn new_todo_is_created_open() {
        let json = serde_json::to_value(NewTodo::new("Title", "Desc")).unwrap();
        assert_eq!(
            json,
            json!({"Title": "Title", "Description": "Desc", "IsCompleted": false})
        );
    }

    #[test]
    fn list_normalization_skips_bad_records_and_duplicates() {
        let todos = normalize_todos(vec![
            json!({"Id": 1, "Title": "one"}),
            json!({"title": "no id"}),
            json!({"id": 2, "title": "two"}),
            json!({"Id": 1, "Title": "one again"}),
        ]);
        let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(todos[0].title, "one");
    }

    #[test]
    fn toggled_flips_only_completion() {
        let todo = Todo {
            id: 9,
            title: "Keep".to_string(),
            description: "Me".to_string(),
            is_completed: false,
        };
        let flipped = todo.toggled();
        assert!(flipped.is_completed);
        assert_eq!(flipped.id, todo.id);
        assert_eq!(flipped.title, todo.title);
        assert_eq!(flipped.description, todo.description);
    }
}
