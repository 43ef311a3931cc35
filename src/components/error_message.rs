//! Error Message Component
//!
//! Banner for a failed request with a retry action.

use leptos::prelude::*;

#[component]
pub fn ErrorMessage(
    #[prop(into)] error: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <div class="error-icon">"⚠️"</div>
            <h3 class="error-title">"Something went wrong"</h3>
            <p class="error-text">{error}</p>
            <button class="btn-secondary" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </div>
    }
}
