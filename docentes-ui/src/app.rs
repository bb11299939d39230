//! App Root Component

use leptos::*;

use crate::components::TeacherDirectoryView;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="container mt-5">
            <TeacherDirectoryView />
        </div>
    }
}
