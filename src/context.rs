//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::hooks::UseTodos;

/// Make the todo hook available to every component below the caller
pub fn provide_todos(todos: UseTodos) {
    provide_context(todos);
}

/// Get the todo hook from context
pub fn use_todo_context() -> UseTodos {
    expect_context::<UseTodos>()
}
