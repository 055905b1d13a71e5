//! Snapshot Encoding
//!
//! The forest is stored as a JSON array of questions, the same shape the
//! browser draft has always used.

use std::collections::HashSet;

use thiserror::Error;

use crate::forest::Forest;
use crate::question::QuestionId;

/// Errors reading or writing a snapshot
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot repeats question id {0}")]
    DuplicateId(QuestionId),
}

impl Forest {
    /// Encode the whole forest
    pub fn serialize(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a snapshot; a missing or blank snapshot is an empty forest
    pub fn restore(snapshot: Option<&str>) -> Result<Forest, SnapshotError> {
        let Some(raw) = snapshot.filter(|s| !s.trim().is_empty()) else {
            return Ok(Forest::new());
        };
        let forest: Forest = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        if let Some(dup) = forest.ids().into_iter().find(|id| !seen.insert(*id)) {
            return Err(SnapshotError::DuplicateId(dup));
        }
        Ok(forest)
    }
}
