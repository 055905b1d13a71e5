//! Question Tree
//!
//! Data model and pure operations behind the QTODO form builder.
//! This crate has NO UI dependencies; the browser front end renders it.

mod config;
mod draft;
mod forest;
mod form;
mod ids;
mod outline;
mod question;
mod snapshot;
mod store;

pub use config::FormConfig;
pub use draft::DraftStore;
pub use forest::Forest;
pub use form::{Action, FormState, Outcome};
pub use ids::IdAllocator;
pub use outline::{label_for, outline, summary, summary_text, OutlineRow, SummaryLine};
pub use question::{Answer, FieldUpdate, Question, QuestionId, QuestionType, UnknownOption};
pub use snapshot::SnapshotError;
pub use store::{KeyValueStore, MemoryStore, StoreError, StoreResult};
