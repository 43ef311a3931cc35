//! Page Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <div class="glass footer-card">
                <p>"Crafted with 💜 using cutting-edge technologies"</p>
                <p>"© 2025 Kristiyan Velkov • Built for the future"</p>
            </div>
        </footer>
    }
}
