//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use question_tree::{Action, Forest, FormState, Outcome};
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Question forest plus the submitted flag
    pub form: FormState,
}

impl AppState {
    pub fn new(forest: Forest) -> Self {
        Self {
            form: FormState::new(forest),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Apply a user action to the form; subscribers only hear about real changes
pub fn store_dispatch(store: &AppStore, action: Action) -> Outcome {
    let outcome = store.form().write_untracked().dispatch(action);
    if outcome != Outcome::Unchanged {
        store.form().notify();
    }
    outcome
}

/// Read from the form state, tracking changes
pub fn store_with_form<T>(store: &AppStore, f: impl FnOnce(&FormState) -> T) -> T {
    f(&store.form().read())
}

/// Read from the form state without subscribing
pub fn store_with_form_untracked<T>(store: &AppStore, f: impl FnOnce(&FormState) -> T) -> T {
    f(&store.form().read_untracked())
}
