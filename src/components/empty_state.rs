//! Empty State Component

use leptos::prelude::*;

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-icon">"📝"</div>
            <h3 class="empty-title">"Ready to get organized?"</h3>
            <p class="empty-text">"Add your first task above to get started."</p>
        </div>
    }
}
