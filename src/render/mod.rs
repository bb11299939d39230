//! Rendering
//!
//! - [`view`]: pure mapping from state to a view tree
//! - [`terminal`]: text output for the terminal host

pub mod terminal;
pub mod view;

pub use terminal::render_text;
pub use view::{render, Bar, BarChart, CardField, DirectoryView, TeacherCard, ValueAxis, View};
