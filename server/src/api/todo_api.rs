//! Todo Handlers
//!
//! CRUD over `/api/todos`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::AppState;
use crate::domain::{DomainError, DomainResult, Task, TaskPatch};
use crate::repository::Repository;

/// Body of `POST /api/todos`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTodo {
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

/// List all todos
pub async fn list_todos(State(state): State<AppState>) -> DomainResult<Json<Vec<Task>>> {
    let tasks = state.tasks.list().await?;
    tracing::debug!(count = tasks.len(), "listed todos");
    Ok(Json(tasks))
}

/// Create a new todo
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> DomainResult<(StatusCode, Json<Task>)> {
    let Json(body) = payload?;

    let mut task = Task::new(&body.name)?;
    task.completed = body.completed;

    let created = state.tasks.create(&task).await?;
    tracing::info!(id = %created.id, "created todo");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get todo by ID
pub async fn get_todo(State(state): State<AppState>, Path(id): Path<String>) -> DomainResult<Json<Task>> {
    state
        .tasks
        .find_by_id(id.clone())
        .await?
        .map(Json)
        .ok_or_else(|| DomainError::NotFound(format!("todo {}", id)))
}

/// Apply a partial update
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> DomainResult<Json<Task>> {
    let Json(patch) = payload?;

    let updated = state.tasks.patch(&id, &patch).await?;
    tracing::info!(id = %updated.id, completed = updated.completed, "updated todo");
    Ok(Json(updated))
}

/// Delete todo
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<String>) -> DomainResult<StatusCode> {
    state.tasks.delete(id.clone()).await?;
    tracing::info!(id = %id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
