//! Question Id Allocation

use std::collections::HashSet;

use crate::forest::Forest;
use crate::question::QuestionId;

/// Monotonic id source; never hands out an id already in the forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    /// `None` once the counter has run past `u64::MAX`
    next: Option<u64>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start past every id already present in `forest`
    pub fn after(forest: &Forest) -> Self {
        let next = match forest.max_id() {
            Some(QuestionId(max)) => max.checked_add(1),
            None => Some(1),
        };
        Self { next }
    }

    /// Fresh id for a node about to join `forest`
    pub fn allocate(&mut self, forest: &Forest) -> QuestionId {
        if let Some(next) = self.next {
            if !forest.contains(QuestionId(next)) {
                self.next = next.checked_add(1);
                return QuestionId(next);
            }
        }
        // Counter exhausted or colliding: take the smallest free id
        let used: HashSet<u64> = forest.ids().into_iter().map(|QuestionId(id)| id).collect();
        let free = (1..=u64::MAX).find(|id| !used.contains(id)).unwrap_or(0);
        log::debug!("id counter exhausted, reusing free id {}", free);
        QuestionId(free)
    }
}
