//! Teacher Card Component

use docentes::render::TeacherCard;
use leptos::*;

/// Detail card for one teacher
#[component]
pub fn TeacherCardItem(card: TeacherCard) -> impl IntoView {
    view! {
        <div class="col-md-4 mb-4">
            <div class="card">
                <div class="card-body">
                    {card.fields.into_iter().enumerate().map(|(i, field)| {
                        let class = if i == 0 { "card-title" } else { "card-text" };
                        view! {
                            <p class=class>
                                {format!("{}: ", field.label)}
                                <strong>{field.value}</strong>
                            </p>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
