//! Frontend Models
//!
//! Data structures matching the todo API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest task name accepted by the API, in characters
pub const MAX_NAME_LEN: usize = 200;

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body of a create request
#[derive(Debug, Clone, Serialize)]
pub struct NewTodo<'a> {
    pub name: &'a str,
}

/// Partial update; absent fields are left untouched by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn completed(completed: bool) -> Self {
        Self { completed: Some(completed), ..Default::default() }
    }

    pub fn rename(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Default::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.completed.is_none()
    }
}

/// Why a task name was rejected before any request was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Task name cannot be empty")]
    Empty,
    #[error("Task name must be at most {} characters", MAX_NAME_LEN)]
    TooLong,
}

/// Trim a user-entered name and check it against the API's rules
pub fn normalize_name(raw: &str) -> Result<String, NameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(NameError::TooLong);
    }
    Ok(name.to_string())
}

/// Completion summary shown above the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
}

impl TodoStats {
    pub fn of(todos: &[Todo]) -> Self {
        Self {
            total: todos.len(),
            completed: todos.iter().filter(|t| t.completed).count(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }

    pub fn summary(&self) -> String {
        format!("{} of {} completed", self.completed, self.total)
    }
}
