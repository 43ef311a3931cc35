//! Add Todo Form Component
//!
//! Text input and submit button for creating todos.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_todo_context;

/// Form for creating new todos
///
/// Length is checked by `normalize_name` on submit, in chars; the browser's
/// `maxlength` counts UTF-16 units and would cut emoji-heavy names short.
#[component]
pub fn AddTodoForm() -> impl IntoView {
    let todos = use_todo_context();

    let (new_text, set_new_text) = signal(String::new());
    let (validation, set_validation) = signal::<Option<String>>(None);

    let cannot_submit = move || todos.loading() || new_text.get().trim().is_empty();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        match todos.add(&text, move || set_new_text.set(String::new())) {
            Ok(()) => set_validation.set(None),
            Err(err) => set_validation.set(Some(err.to_string())),
        }
    };

    view! {
        <form class="add-todo-form" on:submit=add_todo>
            <div class="add-todo-row">
                <input
                    type="text"
                    class="add-todo-input"
                    placeholder="What needs to be done? ✨"
                    prop:value=move || new_text.get()
                    on:input=move |ev| {
                        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                            set_new_text.set(input.value());
                            set_validation.set(None);
                        }
                    }
                />
                <button
                    type="submit"
                    class="btn-primary"
                    aria-label="Add Todo"
                    disabled=cannot_submit
                >
                    "Add Todo"
                </button>
            </div>

            {move || validation.get().map(|msg| view! {
                <p class="form-error" role="alert">{msg}</p>
            })}
        </form>
    }
}
