//! Type Selector Component
//!
//! Dropdowns for the question type and the true/false answer.

use leptos::prelude::*;
use question_tree::{Answer, QuestionType};

/// Question type dropdown
#[component]
pub fn TypeSelector(
    current: QuestionType,
    on_change: impl Fn(QuestionType) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="type-select"
            on:change={move |ev| match event_target_value(&ev).parse::<QuestionType>() {
                Ok(value) => on_change(value),
                Err(e) => log::warn!(target: "FORM", "{}", e),
            }}
        >
            {QuestionType::ALL.into_iter().map(|value| view! {
                <option value=value.as_str() selected={value == current}>
                    {value.label()}
                </option>
            }).collect_view()}
        </select>
    }
}

/// Answer dropdown for true/false questions
#[component]
pub fn AnswerSelector(
    current: Answer,
    on_change: impl Fn(Answer) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="answer-select"
            on:change={move |ev| match event_target_value(&ev).parse::<Answer>() {
                Ok(value) => on_change(value),
                Err(e) => log::warn!(target: "FORM", "{}", e),
            }}
        >
            {Answer::ALL.into_iter().map(|value| view! {
                <option value=value.as_str() selected={value == current}>
                    {value.label()}
                </option>
            }).collect_view()}
        </select>
    }
}
