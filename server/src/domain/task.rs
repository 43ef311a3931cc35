//! Task Entity
//!
//! A single todo: a name and a completion flag. Ids are assigned by the
//! store and are opaque strings on the wire.

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// Longest accepted task name, in characters
pub const MAX_NAME_LEN: usize = 200;

/// A todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, empty until stored
    pub id: String,
    /// Human-readable text
    pub name: String,
    /// Completion status
    pub completed: bool,
    /// RFC 3339 timestamps, set by the repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Task {
    /// Create an unsaved, incomplete task with a validated name
    pub fn new(name: &str) -> DomainResult<Self> {
        Ok(Self {
            id: String::new(),
            name: validate_name(name)?,
            completed: false,
            created_at: None,
            updated_at: None,
        })
    }
}

impl Entity for Task {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// Partial update sent by clients
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.completed.is_none()
    }

    /// Apply the patch to `task`, validating any new name first
    pub fn apply(&self, task: &mut Task) -> DomainResult<()> {
        if self.is_empty() {
            return Err(DomainError::InvalidInput("update must set name or completed".to_string()));
        }
        if let Some(name) = &self.name {
            task.name = validate_name(name)?;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        Ok(())
    }
}

/// Trim and check a task name
pub fn validate_name(raw: &str) -> DomainResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidInput("name must not be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::InvalidInput(format!(
            "name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(name.to_string())
}
