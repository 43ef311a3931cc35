//! Data hooks.

mod use_todos;

pub use use_todos::{use_todos, UseTodos};
