//! Tree Utilities
//!
//! Helper functions for tree rendering.

use question_tree::{outline, Forest, OutlineRow, QuestionId};

/// A root question with its subtree rows; the unit that is dragged
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootBlock {
    /// Position among the roots
    pub index: usize,
    pub id: QuestionId,
    /// The root row followed by its descendants in display order
    pub rows: Vec<OutlineRow>,
}

/// Group outline rows under their root
pub fn root_blocks(forest: &Forest) -> Vec<RootBlock> {
    let mut blocks: Vec<RootBlock> = Vec::with_capacity(forest.roots().len());
    for row in outline(forest) {
        if row.depth == 0 {
            blocks.push(RootBlock {
                index: row.root_index,
                id: row.id,
                rows: vec![row],
            });
        } else if let Some(block) = blocks.last_mut() {
            block.rows.push(row);
        }
    }
    blocks
}
