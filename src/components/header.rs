//! Page Header Component
//!
//! App title, tagline and the technology badges.

use leptos::prelude::*;

const BADGES: &[&str] = &["Rust", "Leptos", "WebAssembly", "Axum"];

#[component]
pub fn Header() -> impl IntoView {
    let badge_count = BADGES.len();

    view! {
        <header class="app-header">
            <div class="app-icon">
                <span>"✨"</span>
            </div>

            <h1 class="app-title">"Test Todo App"</h1>
            <p class="app-tagline">
                "Experience the future of task management with our sleek, Rust-powered application"
            </p>

            <div class="glass badge-row">
                <div class="status-dot"></div>
                {BADGES.iter().enumerate().map(|(i, badge)| {
                    view! {
                        <span class="badge">{*badge}</span>
                        {(i + 1 < badge_count).then(|| view! { <span class="badge-sep">"•"</span> })}
                    }
                }).collect_view()}
            </div>
        </header>
    }
}
