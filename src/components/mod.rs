//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod question_editor;
mod question_row;
mod summary_view;
mod type_selector;

pub use nav_bar::NavBar;
pub use question_editor::QuestionEditor;
pub use question_row::QuestionRow;
pub use summary_view::SummaryView;
pub use type_selector::{AnswerSelector, TypeSelector};
