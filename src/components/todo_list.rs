//! Todo List Component
//!
//! Progress summary plus one row per todo, or the empty state.

use leptos::prelude::*;

use crate::components::{EmptyState, TodoItem};
use crate::context::use_todo_context;
use crate::models::TodoStats;

#[component]
pub fn TodoList() -> impl IntoView {
    let todos = use_todo_context();

    let stats = Memo::new(move |_| TodoStats::of(&todos.todos()));

    view! {
        <Show
            when=move || { stats.get().total > 0 }
            fallback=|| view! { <EmptyState /> }
        >
            <div class="todo-list-header">
                <h2 class="todo-list-title">"Your Tasks"</h2>
                <span
                    class="todo-progress"
                    title=move || format!("{} remaining", stats.get().remaining())
                >
                    {move || stats.get().summary()}
                </span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style:width=move || {
                        let s = stats.get();
                        format!("{}%", s.completed * 100 / s.total.max(1))
                    }
                ></div>
            </div>

            <ul class="todo-list">
                <For
                    each=move || todos.todos()
                    // Rows re-render when any displayed field changes
                    key=|todo| (todo.id.clone(), todo.name.clone(), todo.completed)
                    children=move |todo| view! { <TodoItem todo=todo /> }
                />
            </ul>
        </Show>
    }
}
