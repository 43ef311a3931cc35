//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Todo;

/// State owned by the `use_todos` hook
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Todos in the order the server returned them
    pub todos: Vec<Todo>,
    /// Requests currently in flight
    pub pending: u32,
    /// Message from the last failed request, cleared by the next success
    pub error: Option<String>,
}

pub type TodoStore = Store<TodoState>;

pub fn new_todo_store() -> TodoStore {
    Store::new(TodoState::default())
}

// ========================
// Store Helper Functions
// ========================

/// Mark a request as started
pub fn store_begin_request(store: &TodoStore) {
    *store.pending().write() += 1;
}

/// Mark a request as finished and record its outcome
pub fn store_finish_request(store: &TodoStore, error: Option<String>) {
    {
        let field = store.pending();
        let mut pending = field.write();
        *pending = pending.saturating_sub(1);
    }
    store.error().set(error);
}

pub fn store_set_todos(store: &TodoStore, todos: Vec<Todo>) {
    store.todos().set(todos);
}

pub fn store_add_todo(store: &TodoStore, todo: Todo) {
    append_todo(&mut store.todos().write(), todo);
}

pub fn store_update_todo(store: &TodoStore, updated: Todo) {
    replace_todo(&mut store.todos().write(), updated);
}

pub fn store_remove_todo(store: &TodoStore, id: &str) {
    remove_todo(&mut store.todos().write(), id);
}

pub fn store_todos(store: &TodoStore) -> Vec<Todo> {
    store.todos().get()
}

pub fn store_loading(store: &TodoStore) -> bool {
    store.pending().get() > 0
}

pub fn store_error(store: &TodoStore) -> Option<String> {
    store.error().get()
}

/// Current completion state of a todo, untracked
pub fn store_is_completed(store: &TodoStore, id: &str) -> Option<bool> {
    store.todos().with_untracked(|todos| todos.iter().find(|t| t.id == id).map(|t| t.completed))
}

// ========================
// List Reconciliation
// ========================

/// Append a newly created todo; a todo with the same id is replaced in place instead
pub fn append_todo(todos: &mut Vec<Todo>, todo: Todo) {
    if let Some(existing) = todos.iter_mut().find(|t| t.id == todo.id) {
        *existing = todo;
    } else {
        todos.push(todo);
    }
}

/// Replace the todo with the same id; unknown ids are ignored
pub fn replace_todo(todos: &mut [Todo], updated: Todo) {
    if let Some(existing) = todos.iter_mut().find(|t| t.id == updated.id) {
        *existing = updated;
    }
}

pub fn remove_todo(todos: &mut Vec<Todo>, id: &str) {
    todos.retain(|t| t.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, name: &str, completed: bool) -> Todo {
        Todo { id: id.to_string(), name: name.to_string(), completed }
    }

    fn ids(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_pending_counts_overlapping_requests() {
        Owner::new().with(|| {
            let store = new_todo_store();
            store_begin_request(&store);
            store_begin_request(&store);

            store_finish_request(&store, Some("x".to_string()));
            assert!(store_loading(&store));
            assert_eq!(store_error(&store).as_deref(), Some("x"));

            store_finish_request(&store, None);
            assert!(!store_loading(&store));
            assert_eq!(store_error(&store), None);

            // A stray finish never underflows
            store_finish_request(&store, None);
            assert_eq!(store.pending().get_untracked(), 0);
            assert!(!store_loading(&store));
        });
    }

    #[test]
    fn test_store_list_helpers() {
        Owner::new().with(|| {
            let store = new_todo_store();
            store_set_todos(&store, vec![todo("1", "a", false), todo("2", "b", false)]);
            store_add_todo(&store, todo("3", "c", false));
            store_update_todo(&store, todo("2", "b", true));
            store_remove_todo(&store, "1");
            assert_eq!(store_todos(&store), vec![todo("2", "b", true), todo("3", "c", false)]);
            assert_eq!(store_is_completed(&store, "2"), Some(true));
            assert_eq!(store_is_completed(&store, "1"), None);
        });
    }

    #[test]
    fn test_append_keeps_arrival_order() {
        let mut todos = vec![todo("1", "a", false)];
        append_todo(&mut todos, todo("2", "b", false));
        append_todo(&mut todos, todo("3", "c", false));
        assert_eq!(ids(&todos), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_append_does_not_duplicate_ids() {
        let mut todos = vec![todo("1", "a", false), todo("2", "b", false)];
        append_todo(&mut todos, todo("1", "renamed", true));
        assert_eq!(ids(&todos), vec!["1", "2"]);
        assert_eq!(todos[0].name, "renamed");
    }

    #[test]
    fn test_replace_in_place() {
        let mut todos = vec![todo("1", "a", false), todo("2", "b", false), todo("3", "c", false)];
        replace_todo(&mut todos, todo("2", "b", true));
        assert_eq!(ids(&todos), vec!["1", "2", "3"]);
        assert!(todos[1].completed);
        assert!(!todos[0].completed && !todos[2].completed);
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut todos = vec![todo("1", "a", false)];
        replace_todo(&mut todos, todo("9", "ghost", true));
        assert_eq!(todos, vec![todo("1", "a", false)]);
    }

    #[test]
    fn test_remove() {
        let mut todos = vec![todo("1", "a", false), todo("2", "b", true), todo("3", "c", false)];
        remove_todo(&mut todos, "2");
        assert_eq!(ids(&todos), vec!["1", "3"]);
        remove_todo(&mut todos, "2");
        assert_eq!(ids(&todos), vec!["1", "3"]);
    }
}
