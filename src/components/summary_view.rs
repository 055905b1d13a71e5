//! Summary View Component
//!
//! Read-only rendering of a submitted form.

use leptos::prelude::*;
use question_tree::summary;

use crate::context::use_app_context;
use crate::store::store_with_form_untracked;

/// Submitted questions, numbered and indented like the editor
#[component]
pub fn SummaryView() -> impl IntoView {
    let ctx = use_app_context();
    // The form is frozen once submitted
    let lines = store_with_form_untracked(&ctx.store, |form| summary(form.forest()));

    view! {
        <div class="submitted">
            <h2>"Submitted Questions"</h2>
            {lines.into_iter().map(|line| view! {
                <div class="submitted-question" style=format!("margin-left: {}px;", line.depth * 32)>
                    {line.text}
                </div>
            }).collect_view()}
        </div>
    }
}
