//! Todo Data Hook
//!
//! Owns the todo list and keeps it in sync with the API. Every request bumps
//! the pending counter for its whole lifetime, so `loading()` is true while
//! anything is in flight. Successful responses are merged into the local list
//! and clear the error; failures set it.

use std::future::Future;

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, ApiError};
use crate::models::{normalize_name, NameError, Todo, TodoPatch};
use crate::store::*;

/// Handle returned by [`use_todos`]; cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct UseTodos {
    store: TodoStore,
}

/// Create the todo state and load the list once mounted
pub fn use_todos() -> UseTodos {
    let todos = UseTodos::from_store(new_todo_store());
    Effect::new(move |_| todos.refresh());
    todos
}

/// Message shown in the error banner
pub fn failure_message(action: &str, err: &ApiError) -> String {
    format!("Failed to {}: {}", action, err)
}

impl UseTodos {
    /// Wrap an existing store without loading anything
    pub fn from_store(store: TodoStore) -> Self {
        Self { store }
    }

    pub fn todos(&self) -> Vec<Todo> {
        store_todos(&self.store)
    }

    pub fn loading(&self) -> bool {
        store_loading(&self.store)
    }

    pub fn error(&self) -> Option<String> {
        store_error(&self.store)
    }

    /// Replace the local list with the server's
    pub fn refresh(&self) {
        let store = self.store;
        self.dispatch("fetch todos", commands::list_todos(), move |todos| {
            log!("[TODOS] Loaded {} todos", todos.len());
            store_set_todos(&store, todos);
        });
    }

    /// Create a todo from user input. Invalid names are rejected without a
    /// request; `on_saved` runs once the server has stored the todo.
    pub fn add(&self, raw_name: &str, on_saved: impl FnOnce() + 'static) -> Result<(), NameError> {
        let name = normalize_name(raw_name)?;
        let store = self.store;
        self.dispatch(
            "add todo",
            async move { commands::create_todo(&name).await },
            move |todo| {
                log!("[TODOS] Created {}", todo.id);
                store_add_todo(&store, todo);
                on_saved();
            },
        );
        Ok(())
    }

    pub fn update(&self, id: String, patch: TodoPatch) {
        if patch.is_empty() {
            return;
        }
        let store = self.store;
        self.dispatch(
            "update todo",
            async move { commands::update_todo(&id, &patch).await },
            move |todo| store_update_todo(&store, todo),
        );
    }

    /// Flip `completed` based on the current local value
    pub fn toggle(&self, id: String) {
        if let Some(completed) = store_is_completed(&self.store, &id) {
            self.update(id, TodoPatch::completed(!completed));
        }
    }

    /// Rename a todo; returns the validation error instead of sending an invalid name
    pub fn rename(&self, id: String, raw_name: &str) -> Result<(), NameError> {
        let name = normalize_name(raw_name)?;
        self.update(id, TodoPatch::rename(name));
        Ok(())
    }

    pub fn delete(&self, id: String) {
        let store = self.store;
        let removed = id.clone();
        self.dispatch(
            "delete todo",
            async move { commands::delete_todo(&id).await },
            move |()| store_remove_todo(&store, &removed),
        );
    }

    /// Run one request with pending/error bookkeeping around it
    fn dispatch<T, Fut, F>(&self, action: &'static str, request: Fut, on_ok: F)
    where
        T: 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        F: FnOnce(T) + 'static,
    {
        let store = self.store;
        store_begin_request(&store);
        spawn_local(async move {
            match request.await {
                Ok(value) => {
                    on_ok(value);
                    store_finish_request(&store, None);
                }
                Err(err) => {
                    error!("[TODOS] {} failed: {}", action, err);
                    store_finish_request(&store, Some(failure_message(action, &err)));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TodoState;
    use reactive_stores::Store;

    #[test]
    fn test_accessors_read_the_store() {
        Owner::new().with(|| {
            let todos = UseTodos::from_store(Store::new(TodoState {
                todos: vec![Todo { id: "1".to_string(), name: "Ship it".to_string(), completed: false }],
                pending: 1,
                error: Some("Failed to add todo: boom".to_string()),
            }));
            assert_eq!(todos.todos().len(), 1);
            assert!(todos.loading());
            assert_eq!(todos.error().as_deref(), Some("Failed to add todo: boom"));
        });
    }

    #[test]
    fn test_invalid_names_are_rejected_without_a_request() {
        Owner::new().with(|| {
            let todos = UseTodos::from_store(new_todo_store());
            assert_eq!(todos.add("   ", || {}), Err(NameError::Empty));
            assert_eq!(todos.rename("1".to_string(), &"x".repeat(201)), Err(NameError::TooLong));
            assert!(!todos.loading());
        });
    }

    #[test]
    fn test_failure_message() {
        let err = ApiError::Status { status: 500, message: "database is locked".to_string() };
        assert_eq!(failure_message("fetch todos", &err), "Failed to fetch todos: database is locked");
    }

    #[test]
    fn test_failure_message_network() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(
            failure_message("add todo", &err),
            "Failed to add todo: could not reach the server (Failed to fetch)"
        );
    }
}
