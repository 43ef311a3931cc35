//! Todo Commands
//!
//! Frontend bindings for the `/todos` resource.

use gloo_net::http::Request;

use super::{request_empty, request_json, todos_url, with_json, without_body, ApiError, API_BASE};
use crate::models::{NewTodo, Todo, TodoPatch};

pub async fn list_todos() -> Result<Vec<Todo>, ApiError> {
    request_json(without_body(Request::get(&todos_url(API_BASE, None)))?).await
}

pub async fn create_todo(name: &str) -> Result<Todo, ApiError> {
    request_json(with_json(Request::post(&todos_url(API_BASE, None)), &NewTodo { name })?).await
}

/// Apply a partial update and return the stored todo
pub async fn update_todo(id: &str, patch: &TodoPatch) -> Result<Todo, ApiError> {
    request_json(with_json(Request::patch(&todos_url(API_BASE, Some(id))), patch)?).await
}

pub async fn delete_todo(id: &str) -> Result<(), ApiError> {
    request_empty(without_body(Request::delete(&todos_url(API_BASE, Some(id))))?).await
}
