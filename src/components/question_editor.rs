//! Question Editor Component
//!
//! Displays the forest as numbered form controls with drag-and-drop
//! reordering of the root questions.
//! Uses leptos-dragdrop with explicit drop slots between root blocks.

use leptos::prelude::*;
use question_tree::Action;

use crate::components::QuestionRow;
use crate::context::use_app_context;
use crate::store::store_with_form;
use crate::tree::root_blocks;

use leptos_dragdrop::*;

/// Editor with add and submit controls
#[component]
pub fn QuestionEditor(dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();

    let blocks = move || store_with_form(&ctx.store, |form| root_blocks(form.forest()));
    let count = move || store_with_form(&ctx.store, |form| form.forest().len());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Action::Submit);
    };

    view! {
        <form class="question-form" on:submit=on_submit>
            <div class="question-list">
                // Slot before the first root
                <DropZone dnd=dnd slot=0 />

                <For
                    each=blocks
                    // Text is read reactively inside each row, so typing does not re-key
                    key=|block| block.clone()
                    children=move |block| {
                        let index = block.index;
                        let on_mousedown = make_on_mousedown(dnd, index);
                        let is_dragging = move || dnd.dragging_read.get() == Some(index);
                        let block_class = move || {
                            if is_dragging() { "question-block dragging" } else { "question-block" }
                        };

                        view! {
                            <div class=block_class on:mousedown=on_mousedown>
                                {block.rows.into_iter().map(|row| view! { <QuestionRow row=row /> }).collect_view()}
                            </div>

                            // Slot after this root
                            <DropZone dnd=dnd slot={index + 1} />
                        }
                    }
                />
            </div>

            <div class="form-actions">
                <button type="button" class="add-question" on:click=move |_| ctx.dispatch(Action::AddRoot)>
                    "Add New Question"
                </button>
                <button type="submit" class="submit">"Submit Form"</button>
            </div>

            <p class="item-count">{move || format!("{} questions", count())}</p>
        </form>
    }
}

/// Drop zone component - a horizontal separator between root questions
#[component]
pub fn DropZone(dnd: DndSignals, slot: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || dnd.drop_slot_read.get() == Some(DropSlot(slot));
    // Only show when dragging
    let is_dragging = move || dnd.dragging_read.get().is_some();

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
