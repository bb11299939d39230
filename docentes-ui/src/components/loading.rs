//! Loading Component
//!
//! Placeholder views shown instead of the directory.

use leptos::*;

/// Shown until the first successful fetch
#[component]
pub fn Loading(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="loading">{message}</div>
    }
}

/// Shown whenever the latest fetch failed
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="error" role="alert">{message}</div>
    }
}
