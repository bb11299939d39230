//! Teacher Directory Component
//!
//! Mounting starts the fetch loop; cleanup drops the interval and marks the
//! state unmounted so late responses are ignored.

use docentes::render::{render, TeacherCard, View};
use leptos::*;

use crate::components::{ErrorMessage, GenderChart, Loading, TeacherCardItem};
use crate::state::DirectoryState;

/// The teacher directory, with cards and a per-gender chart
#[component]
pub fn TeacherDirectoryView() -> impl IntoView {
    let state = DirectoryState::new();
    let interval = state.start_polling();

    let state_for_cleanup = state.clone();
    on_cleanup(move || {
        state_for_cleanup.unmount();
        drop(interval);
    });

    let current = create_memo(move |_| state.view.with(render));

    // The layout only rebuilds when switching between placeholder and
    // directory. Within the directory, cards are diffed by identity.
    let showing_directory =
        create_memo(move |_| current.with(|v| matches!(v, View::Directory(_))));
    let title = create_memo(move |_| {
        current.with(|v| match v {
            View::Directory(directory) => directory.title.clone(),
            _ => String::new(),
        })
    });
    let cards = create_memo(move |_| {
        current.with(|v| match v {
            View::Directory(directory) => directory.cards.clone(),
            _ => Vec::new(),
        })
    });
    let chart = create_memo(move |_| {
        current.with(|v| match v {
            View::Directory(directory) => Some(directory.chart.clone()),
            _ => None,
        })
    });

    move || {
        if showing_directory.get() {
            return view! {
                <h1 class="titulo">{title}</h1>

                <div class="row">
                    <For
                        each=move || cards.get()
                        key=card_identity
                        children=move |card| view! { <TeacherCardItem card=card /> }
                    />
                </div>

                <GenderChart chart=chart />
            }
            .into_view();
        }

        current.with(|v| match v {
            View::Loading { message } => view! { <Loading message=message.clone() /> }.into_view(),
            View::Error { message } => view! { <ErrorMessage message=message.clone() /> }.into_view(),
            View::Directory(_) => ().into_view(),
        })
    }
}

/// Cards keep their DOM while both the record key and the shown values are
/// unchanged; an edited record is re-rendered in place of the old one.
fn card_identity(card: &TeacherCard) -> (String, Vec<String>) {
    let values = card.fields.iter().map(|field| field.value.clone()).collect();
    (card.key.clone(), values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docentes::render::CardField;

    fn card(key: &str, phone: &str) -> TeacherCard {
        TeacherCard {
            key: key.to_string(),
            fields: vec![
                CardField {
                    label: "Nombre".to_string(),
                    value: "Ana".to_string(),
                },
                CardField {
                    label: "Teléfono".to_string(),
                    value: phone.to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_unchanged_card_keeps_identity() {
        assert_eq!(card_identity(&card("1", "555-1")), card_identity(&card("1", "555-1")));
    }

    #[test]
    fn test_edited_card_gets_new_identity() {
        assert_ne!(card_identity(&card("1", "555-1")), card_identity(&card("1", "555-9")));
        assert_ne!(card_identity(&card("1", "555-1")), card_identity(&card("2", "555-1")));
    }
}
