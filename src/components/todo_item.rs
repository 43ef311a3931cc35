//! Todo Item Component
//!
//! A single todo row: checkbox, name (inline editable) and delete.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::DeleteConfirmButton;
use crate::context::use_todo_context;
use crate::models::Todo;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let todos = use_todo_context();

    let Todo { id, name, completed } = todo;
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(name.clone());
    let (edit_error, set_edit_error) = signal::<Option<String>>(None);

    let start_edit = {
        let name = name.clone();
        move || {
            set_draft.set(name.clone());
            set_edit_error.set(None);
            set_editing.set(true);
        }
    };

    // Only sends a request when the trimmed name actually changed
    let commit = {
        let id = id.clone();
        let name = name.clone();
        move || {
            if !editing.get_untracked() {
                return;
            }
            let text = draft.get_untracked();
            if text.trim() == name {
                set_editing.set(false);
                return;
            }
            match todos.rename(id.clone(), &text) {
                Ok(()) => set_editing.set(false),
                Err(err) => set_edit_error.set(Some(err.to_string())),
            }
        }
    };

    let toggle_id = id.clone();
    let delete_id = id.clone();
    let on_delete = Callback::new(move |()| todos.delete(delete_id.clone()));

    let row_class = if completed { "todo-item completed" } else { "todo-item" };
    let commit_on_key = commit.clone();
    let start_on_dblclick = start_edit.clone();

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                class="todo-checkbox"
                aria-label=format!("Mark {} as {}", name, if completed { "incomplete" } else { "complete" })
                checked=completed
                disabled=move || todos.loading()
                on:change=move |_| todos.toggle(toggle_id.clone())
            />

            <Show
                when=move || editing.get()
                fallback={
                    let name = name.clone();
                    let start_on_dblclick = start_on_dblclick.clone();
                    move || {
                        let start = start_on_dblclick.clone();
                        view! {
                            <span class="todo-name" on:dblclick=move |_| start()>{name.clone()}</span>
                        }
                    }
                }
            >
                <input
                    type="text"
                    class="todo-edit-input"
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                            set_draft.set(input.value());
                        }
                    }
                    on:keydown={
                        let commit = commit_on_key.clone();
                        move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                            "Enter" => commit(),
                            "Escape" => set_editing.set(false),
                            _ => {}
                        }
                    }
                    on:blur={
                        let commit = commit.clone();
                        move |_| commit()
                    }
                />
            </Show>

            {move || edit_error.get().map(|msg| view! { <span class="form-error">{msg}</span> })}

            <Show when=move || !editing.get()>
                <button
                    class="icon-btn edit-btn"
                    title="Edit"
                    on:click={
                        let start = start_edit.clone();
                        move |_| start()
                    }
                >
                    "✎"
                </button>
            </Show>

            <DeleteConfirmButton button_class="icon-btn delete-btn" on_confirm=on_delete />
        </li>
    }
}
