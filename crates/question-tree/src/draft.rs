//! Draft Persistence
//!
//! Keeps the forest snapshot in a key-value store. Failures are logged and
//! swallowed: the in-memory forest stays authoritative for the session.

use crate::forest::Forest;
use crate::form::Outcome;
use crate::store::KeyValueStore;

/// Snapshot of the draft forest under a single key
#[derive(Debug, Clone)]
pub struct DraftStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Forest saved by a previous session, or an empty one
    pub fn restore(&self) -> Forest {
        let raw = match self.store.load(&self.key) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("could not read draft: {}", e);
                return Forest::new();
            }
        };
        match Forest::restore(raw.as_deref()) {
            Ok(forest) => {
                log::debug!("restored draft with {} questions", forest.len());
                forest
            }
            Err(e) => {
                log::warn!("discarding unreadable draft: {}", e);
                Forest::new()
            }
        }
    }

    /// Write the snapshot; returns whether it was stored
    pub fn persist(&self, forest: &Forest) -> bool {
        let snapshot = match forest.serialize() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("could not encode draft: {}", e);
                return false;
            }
        };
        match self.store.save(&self.key, &snapshot) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("could not save draft: {}", e);
                false
            }
        }
    }

    /// Follow up a dispatched action: save changes, drop the draft on submit.
    ///
    /// `Unchanged` touches nothing, so no-op gestures never rewrite storage.
    pub fn sync(&self, outcome: Outcome, forest: &Forest) {
        match outcome {
            Outcome::Changed => {
                self.persist(forest);
            }
            Outcome::Submitted => {
                self.discard();
            }
            Outcome::Unchanged => {}
        }
    }

    /// Drop the stored snapshot
    pub fn discard(&self) -> bool {
        match self.store.remove(&self.key) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("could not remove draft: {}", e);
                false
            }
        }
    }
}
