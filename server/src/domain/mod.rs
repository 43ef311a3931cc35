//! Domain Layer
//!
//! Contains the task entity and core abstractions.
//! This layer has no storage or HTTP dependencies.

mod entity;
mod task;

pub use entity::{Entity, DomainError, DomainResult};
pub use task::{Task, TaskPatch};
