//! Glass Todo Frontend App
//!
//! Single-column layout: header, add form, then loading/error/list panel.

use leptos::prelude::*;

use crate::components::{AddTodoForm, ErrorMessage, Footer, Header, LoadingSpinner, TodoList};
use crate::context::{provide_todos, use_todo_context};
use crate::hooks::use_todos;
use crate::view_state::Panel;

#[component]
pub fn App() -> impl IntoView {
    let todos = use_todos();
    provide_todos(todos);

    view! {
        <div class="app-shell">
            <div class="blob-layer" aria-hidden="true">
                <div class="blob blob-purple"></div>
                <div class="blob blob-yellow"></div>
                <div class="blob blob-pink"></div>
            </div>

            <div class="container">
                <Header />

                <main class="app-main">
                    <div class="card">
                        <AddTodoForm />
                    </div>

                    <MainPanel />
                </main>

                <Footer />
            </div>
        </div>
    }
}

/// Loading spinner, error banner or the list, depending on the hook's state
#[component]
fn MainPanel() -> impl IntoView {
    let todos = use_todo_context();

    let panel = Memo::new(move |_| Panel::select(todos.loading(), todos.error().as_deref()));
    let retry = Callback::new(move |()| todos.refresh());

    move || match panel.get() {
        Panel::Loading => view! {
            <div class="card">
                <LoadingSpinner message="Loading your awesome todos..." />
            </div>
        }.into_any(),
        Panel::Error(error) => view! {
            <div class="card">
                <ErrorMessage error=error on_retry=retry />
            </div>
        }.into_any(),
        Panel::List => view! {
            <div class="card">
                <TodoList />
            </div>
        }.into_any(),
    }
}
