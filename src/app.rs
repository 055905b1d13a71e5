//! QTODO Frontend App
//!
//! Restores the draft, wires persistence and drag-and-drop, and switches
//! between the editor and the submitted summary.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use question_tree::{Action, DraftStore, FormConfig};
use reactive_stores::Store;

use crate::components::{NavBar, QuestionEditor, SummaryView};
use crate::context::AppContext;
use crate::storage::BrowserStore;
use crate::store::{store_with_form, AppState};

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let draft = DraftStore::new(BrowserStore, config.storage_key.clone());
    let forest = draft.restore();
    log::info!(target: "APP", "restored {} questions", forest.len());

    let store = Store::new(AppState::new(forest));
    let ctx = AppContext::new(store, config, draft);

    // Provide context to all children
    provide_context(ctx);

    // Lives as long as the app so document listeners never outlive it
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |from, to| {
        ctx.dispatch(Action::ReorderRoots { from, to });
    });

    let submitted = move || store_with_form(&store, |form| form.is_submitted());
    let heading = ctx.config.with_value(|config| config.heading.clone());

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                <h1>{heading}</h1>

                <Show
                    when=move || !submitted()
                    fallback=|| view! { <SummaryView /> }
                >
                    <QuestionEditor dnd=dnd />
                </Show>
            </main>
        </div>
    }
}

/// Overrides from `<body data-form-config='{...}'>`, defaults otherwise
fn load_config() -> FormConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
        .and_then(|body| body.get_attribute("data-form-config"));

    match raw {
        Some(raw) => FormConfig::from_json(&raw).unwrap_or_else(|e| {
            log::warn!(target: "APP", "ignoring invalid form config: {}", e);
            FormConfig::default()
        }),
        None => FormConfig::default(),
    }
}
