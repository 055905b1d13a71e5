//! Form Scenario Tests
//!
//! Drives `FormState` and `DraftStore` together over an in-memory store,
//! the same way the UI wires them.

use crate::draft::DraftStore;
use crate::form::{Action, FormState, Outcome};
use crate::outline::summary;
use crate::question::{Answer, FieldUpdate, QuestionId, QuestionType};
use crate::store::{KeyValueStore, MemoryStore};

const KEY: &str = "dynamicFormQuestions";

fn setup() -> (FormState, DraftStore<MemoryStore>) {
    let draft = DraftStore::new(MemoryStore::new(), KEY);
    let form = FormState::new(draft.restore());
    (form, draft)
}

/// Apply an action and run the persistence subscriber
fn apply(form: &mut FormState, draft: &DraftStore<MemoryStore>, action: Action) -> Outcome {
    let outcome = form.dispatch(action);
    draft.sync(outcome, form.forest());
    outcome
}

fn root_id(form: &FormState, index: usize) -> QuestionId {
    form.forest().roots()[index].id
}

#[test]
fn test_add_root_from_empty() {
    let (mut form, draft) = setup();
    assert_eq!(apply(&mut form, &draft, Action::AddRoot), Outcome::Changed);

    let roots = form.forest().roots();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].question_type, QuestionType::ShortAnswer);
    assert_eq!(roots[0].text, "");
    assert!(roots[0].children.is_empty());
    assert_eq!(draft.store().get(KEY).as_deref(), Some(r#"[{"id":1,"text":"","type":"Short Answer","children":[],"answer":""}]"#));
}

#[test]
fn test_sub_question_flow() {
    let (mut form, draft) = setup();
    apply(&mut form, &draft, Action::AddRoot);
    let id = root_id(&form, 0);
    apply(&mut form, &draft, Action::Update { id, field: FieldUpdate::Type(QuestionType::TrueFalse) });
    apply(&mut form, &draft, Action::Update { id, field: FieldUpdate::Answer(Answer::True) });
    assert_eq!(apply(&mut form, &draft, Action::AddChild { parent: id }), Outcome::Changed);

    let root = &form.forest().roots()[0];
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].text, "");
    assert_eq!(root.children[0].question_type, QuestionType::ShortAnswer);
    assert_eq!(root.children[0].answer, Answer::Unset);
    assert_ne!(root.children[0].id, id);
}

#[test]
fn test_reorder_and_cancelled_drag() {
    let (mut form, draft) = setup();
    apply(&mut form, &draft, Action::AddRoot);
    apply(&mut form, &draft, Action::AddRoot);
    let (a, b) = (root_id(&form, 0), root_id(&form, 1));

    assert_eq!(apply(&mut form, &draft, Action::ReorderRoots { from: 0, to: None }), Outcome::Unchanged);
    assert_eq!(apply(&mut form, &draft, Action::ReorderRoots { from: 0, to: Some(1) }), Outcome::Changed);
    assert_eq!(form.forest().ids(), vec![b, a]);
}

#[test]
fn test_delete_root_with_child() {
    let (mut form, draft) = setup();
    apply(&mut form, &draft, Action::AddRoot);
    let id = root_id(&form, 0);
    apply(&mut form, &draft, Action::AddChild { parent: id });
    apply(&mut form, &draft, Action::Delete { id });

    assert!(form.forest().is_empty());
    assert_eq!(draft.store().get(KEY).as_deref(), Some("[]"));
}

#[test]
fn test_unknown_ids_do_not_persist() {
    let (mut form, draft) = setup();
    let missing = QuestionId(404);
    assert_eq!(apply(&mut form, &draft, Action::AddChild { parent: missing }), Outcome::Unchanged);
    assert_eq!(apply(&mut form, &draft, Action::Delete { id: missing }), Outcome::Unchanged);
    assert_eq!(draft.store().get(KEY), None);
}

#[test]
fn test_submit_keeps_forest_and_drops_draft() {
    let (mut form, draft) = setup();
    apply(&mut form, &draft, Action::AddRoot);
    let id = root_id(&form, 0);
    apply(&mut form, &draft, Action::Update { id, field: FieldUpdate::Text("Your name".into()) });
    let before = form.forest().clone();
    assert!(draft.store().get(KEY).is_some());

    assert_eq!(apply(&mut form, &draft, Action::Submit), Outcome::Submitted);
    assert!(form.is_submitted());
    assert_eq!(form.forest(), &before);
    assert_eq!(draft.store().get(KEY), None);

    let lines = summary(form.forest());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "Q1: Your name (ShortAnswer)");
    assert!(!lines[0].text.contains("Answer:"));
}

#[test]
fn test_no_mutations_after_submit() {
    let (mut form, draft) = setup();
    apply(&mut form, &draft, Action::AddRoot);
    apply(&mut form, &draft, Action::Submit);
    let frozen = form.forest().clone();

    assert_eq!(apply(&mut form, &draft, Action::AddRoot), Outcome::Unchanged);
    assert_eq!(apply(&mut form, &draft, Action::Submit), Outcome::Unchanged);
    assert_eq!(form.forest(), &frozen);
    assert_eq!(draft.store().get(KEY), None);
}

#[test]
fn test_restored_session_continues_ids() {
    let (mut form, draft) = setup();
    apply(&mut form, &draft, Action::AddRoot);
    apply(&mut form, &draft, Action::AddRoot);

    let mut reopened = FormState::new(draft.restore());
    assert_eq!(reopened.forest(), form.forest());
    reopened.dispatch(Action::AddRoot);
    let ids = reopened.forest().ids();
    assert_eq!(ids.len(), 3);
    assert!(ids[2] > ids[1]);
}

#[test]
fn test_write_failure_keeps_memory_authoritative() {
    let (mut form, draft) = setup();
    draft.store().set_fail_writes(true);
    assert_eq!(apply(&mut form, &draft, Action::AddRoot), Outcome::Changed);
    assert_eq!(form.forest().roots().len(), 1);
    assert_eq!(draft.store().get(KEY), None);
}

#[test]
fn test_noop_gestures_do_not_rewrite_draft() {
    let draft = DraftStore::new(MemoryStore::new(), KEY);
    let mut form = FormState::new(draft.restore());
    apply(&mut form, &draft, Action::AddRoot);
    let saved = draft.store().get(KEY);

    // Overwrite behind the form's back; an unchanged dispatch must not restore it
    draft.store().save(KEY, "marker").unwrap();
    let id = root_id(&form, 0);
    assert_eq!(apply(&mut form, &draft, Action::ReorderRoots { from: 0, to: None }), Outcome::Unchanged);
    assert_eq!(apply(&mut form, &draft, Action::Delete { id: QuestionId(999) }), Outcome::Unchanged);
    assert_eq!(apply(&mut form, &draft, Action::Update { id, field: FieldUpdate::Text(String::new()) }), Outcome::Unchanged);
    assert_eq!(draft.store().get(KEY).as_deref(), Some("marker"));
    assert!(saved.is_some());
}

#[test]
fn test_restored_max_id_still_allocates_unique() {
    let raw = r#"[{"id":18446744073709551615}]"#;
    let draft = DraftStore::new(MemoryStore::with_entry(KEY, raw), KEY);
    let mut form = FormState::new(draft.restore());
    assert_eq!(form.forest().ids(), vec![QuestionId(u64::MAX)]);

    assert_eq!(apply(&mut form, &draft, Action::AddRoot), Outcome::Changed);
    let parent = root_id(&form, 1);
    apply(&mut form, &draft, Action::AddChild { parent });

    let ids = form.forest().ids();
    assert_eq!(ids.len(), 3);
    let unique: std::collections::HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 3);

    // The saved draft still restores
    assert_eq!(draft.restore(), *form.forest());
}
