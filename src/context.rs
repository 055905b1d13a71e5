//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use question_tree::{Action, DraftStore, FormConfig, Outcome};

use crate::storage::BrowserStore;
use crate::store::{store_dispatch, store_with_form_untracked, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Form state store
    pub store: AppStore,
    /// Branding and storage settings
    pub config: StoredValue<FormConfig>,
    /// Draft snapshot in browser storage
    draft: StoredValue<DraftStore<BrowserStore>>,
}

impl AppContext {
    pub fn new(store: AppStore, config: FormConfig, draft: DraftStore<BrowserStore>) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            draft: StoredValue::new(draft),
        }
    }

    /// Apply a gesture, then save or drop the draft to match.
    /// No-op gestures leave storage untouched.
    pub fn dispatch(&self, action: Action) {
        let outcome = store_dispatch(&self.store, action);
        if outcome == Outcome::Submitted {
            log::info!(target: "FORM", "submitted, removing draft");
        }
        store_with_form_untracked(&self.store, |form| {
            self.draft.with_value(|draft| draft.sync(outcome, form.forest()));
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
