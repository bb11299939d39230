//! UI Components
//!
//! Leptos components for the teacher directory.

pub mod directory_view;
pub mod gender_chart;
pub mod loading;
pub mod teacher_card;

pub use directory_view::TeacherDirectoryView;
pub use gender_chart::GenderChart;
pub use loading::{ErrorMessage, Loading};
pub use teacher_card::TeacherCardItem;
