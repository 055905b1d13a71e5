//! Question Row Component
//!
//! Editable controls for a single question.

use leptos::prelude::*;
use question_tree::{Action, FieldUpdate, OutlineRow, QuestionType};

use crate::components::{AnswerSelector, TypeSelector};
use crate::context::use_app_context;
use crate::store::store_with_form;

/// Indentation per nesting level
const INDENT_PX: usize = 32;

/// A single question row in the editor
#[component]
pub fn QuestionRow(row: OutlineRow) -> impl IntoView {
    let ctx = use_app_context();

    let id = row.id;
    let indent = row.depth * INDENT_PX;
    let row_class = if row.has_children { "question-row has-children" } else { "question-row" };
    let text = move || {
        store_with_form(&ctx.store, |form| {
            form.forest().find(id).map(|q| q.text.clone()).unwrap_or_default()
        })
    };

    view! {
        <div class=row_class style=format!("margin-left: {}px;", indent)>
            <span class="question-label">{row.label.clone()}</span>

            <input
                type="text"
                class="question-text"
                placeholder="Enter question"
                prop:value=text
                on:input=move |ev| ctx.dispatch(Action::Update {
                    id,
                    field: FieldUpdate::Text(event_target_value(&ev)),
                })
            />

            <TypeSelector
                current=row.question_type
                on_change=move |value| ctx.dispatch(Action::Update { id, field: FieldUpdate::Type(value) })
            />

            // Answer only applies to true/false
            {(row.question_type == QuestionType::TrueFalse).then(|| view! {
                <AnswerSelector
                    current=row.answer
                    on_change=move |value| ctx.dispatch(Action::Update { id, field: FieldUpdate::Answer(value) })
                />
            })}

            <button type="button" class="delete" on:click=move |_| ctx.dispatch(Action::Delete { id })>
                "Delete"
            </button>

            {row.offers_sub_question.then(|| view! {
                <button type="button" class="add-question" on:click=move |_| ctx.dispatch(Action::AddChild { parent: id })>
                    "Add Sub-question"
                </button>
            })}
        </div>
    }
}
