//! Loading Spinner Component

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(into, optional)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <div class="spinner"></div>
            {message.map(|msg| view! { <p class="loading-message">{msg}</p> })}
        </div>
    }
}
