//! Form State
//!
//! The editable forest plus the submitted flag. User gestures arrive as
//! [`Action`]s; the caller persists or discards the draft based on the
//! returned [`Outcome`].

use crate::forest::Forest;
use crate::ids::IdAllocator;
use crate::question::{FieldUpdate, QuestionId};

#[cfg(test)]
mod tests;

/// A user gesture against the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddRoot,
    AddChild { parent: QuestionId },
    Update { id: QuestionId, field: FieldUpdate },
    Delete { id: QuestionId },
    /// `to == None` is a drag released outside the list
    ReorderRoots { from: usize, to: Option<usize> },
    Submit,
}

/// What a dispatched action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed (unknown id, cancelled drag, or already submitted)
    Unchanged,
    /// The forest changed and should be persisted
    Changed,
    /// The form was just submitted; the stored draft should be dropped
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    forest: Forest,
    ids: IdAllocator,
    submitted: bool,
}

impl FormState {
    /// Editable form over a restored (or empty) forest
    pub fn new(forest: Forest) -> Self {
        let ids = IdAllocator::after(&forest);
        Self {
            forest,
            ids,
            submitted: false,
        }
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        if self.submitted {
            log::debug!("form already submitted, ignoring {:?}", action);
            return Outcome::Unchanged;
        }
        log::debug!("dispatch {:?}", action);

        let next = match action {
            Action::AddRoot => self.forest.add_root(self.ids.allocate(&self.forest)),
            Action::AddChild { parent } => {
                if !self.forest.contains(parent) {
                    return Outcome::Unchanged;
                }
                self.forest.add_child(parent, self.ids.allocate(&self.forest))
            }
            Action::Update { id, field } => self.forest.update_field(id, field),
            Action::Delete { id } => self.forest.delete_subtree(id),
            Action::ReorderRoots { from, to } => self.forest.reorder_roots(from, to),
            Action::Submit => {
                self.submitted = true;
                return Outcome::Submitted;
            }
        };

        if next == self.forest {
            Outcome::Unchanged
        } else {
            self.forest = next;
            Outcome::Changed
        }
    }
}
