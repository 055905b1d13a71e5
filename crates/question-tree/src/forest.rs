//! Question Forest
//!
//! Ordered sequence of root questions with pure update operations.
//! Every mutation returns a new forest; only the path from the root to the
//! touched node is rebuilt.

use serde::{Deserialize, Serialize};

use crate::question::{FieldUpdate, Question, QuestionId};

/// Ordered roots of the question tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest {
    roots: Vec<Question>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[Question] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of questions at every depth
    pub fn len(&self) -> usize {
        self.roots.iter().map(|q| 1 + q.descendant_count()).sum()
    }

    /// Depth-first lookup across all subtrees
    pub fn find(&self, id: QuestionId) -> Option<&Question> {
        fn search(nodes: &[Question], id: QuestionId) -> Option<&Question> {
            nodes.iter().find_map(|node| {
                if node.id == id {
                    Some(node)
                } else {
                    search(&node.children, id)
                }
            })
        }
        search(&self.roots, id)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.find(id).is_some()
    }

    /// All ids in display order
    pub fn ids(&self) -> Vec<QuestionId> {
        let mut ids = Vec::with_capacity(self.len());
        for root in &self.roots {
            root.walk(&mut |q| ids.push(q.id));
        }
        ids
    }

    pub fn max_id(&self) -> Option<QuestionId> {
        self.ids().into_iter().max()
    }

    /// Append a default question at the end of the roots
    pub fn add_root(&self, id: QuestionId) -> Forest {
        let mut roots = self.roots.clone();
        roots.push(Question::new(id));
        Forest { roots }
    }

    /// Append a default question under `parent_id`; unknown parent is a no-op
    pub fn add_child(&self, parent_id: QuestionId, id: QuestionId) -> Forest {
        self.map_node(parent_id, |parent| {
            let mut children = parent.children.clone();
            children.push(Question::new(id));
            parent.with_children(children)
        })
    }

    /// Replace one field of the question `id`; unknown id is a no-op
    pub fn update_field(&self, id: QuestionId, update: FieldUpdate) -> Forest {
        self.map_node(id, |node| node.with_field(update.clone()))
    }

    /// Remove the question `id` and its whole subtree, wherever it sits
    pub fn delete_subtree(&self, id: QuestionId) -> Forest {
        fn prune(nodes: &[Question], id: QuestionId) -> Vec<Question> {
            nodes
                .iter()
                .filter(|node| node.id != id)
                .map(|node| node.with_children(prune(&node.children, id)))
                .collect()
        }
        Forest { roots: prune(&self.roots, id) }
    }

    /// Move the root at `from` so it ends up at index `to`.
    ///
    /// `to == None` is a cancelled drag and returns the forest unchanged, as
    /// does an out-of-range `from`. A `to` past the end lands last.
    pub fn reorder_roots(&self, from: usize, to: Option<usize>) -> Forest {
        let Some(to) = to else {
            return self.clone();
        };
        if from >= self.roots.len() {
            return self.clone();
        }
        let mut roots = self.roots.clone();
        let moved = roots.remove(from);
        let to = to.min(roots.len());
        roots.insert(to, moved);
        Forest { roots }
    }

    /// Rebuild the path to `id`, applying `edit` to the node itself
    fn map_node(&self, id: QuestionId, edit: impl Fn(&Question) -> Question) -> Forest {
        fn rebuild(
            nodes: &[Question],
            id: QuestionId,
            edit: &dyn Fn(&Question) -> Question,
        ) -> Option<Vec<Question>> {
            for (index, node) in nodes.iter().enumerate() {
                let replacement = if node.id == id {
                    Some(edit(node))
                } else {
                    rebuild(&node.children, id, edit).map(|children| node.with_children(children))
                };
                if let Some(replacement) = replacement {
                    let mut out = nodes.to_vec();
                    out[index] = replacement;
                    return Some(out);
                }
            }
            None
        }

        match rebuild(&self.roots, id, &edit) {
            Some(roots) => Forest { roots },
            None => {
                log::debug!("question {} not found, forest unchanged", id);
                self.clone()
            }
        }
    }
}

impl Question {
    /// Copy of this question's own fields over a new child list
    pub(crate) fn with_children(&self, children: Vec<Question>) -> Question {
        Question {
            id: self.id,
            text: self.text.clone(),
            question_type: self.question_type,
            children,
            answer: self.answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{Answer, QuestionType};

    fn id(n: u64) -> QuestionId {
        QuestionId(n)
    }

    /// 1
    /// ├── 2
    /// │   └── 4
    /// └── 3
    /// 5
    fn sample() -> Forest {
        Forest::new()
            .add_root(id(1))
            .add_root(id(5))
            .add_child(id(1), id(2))
            .add_child(id(1), id(3))
            .add_child(id(2), id(4))
            .update_field(id(3), FieldUpdate::Text("third".into()))
    }

    #[test]
    fn test_add_root_defaults() {
        let forest = Forest::new().add_root(id(1));
        assert_eq!(forest.roots().len(), 1);
        let q = &forest.roots()[0];
        assert_eq!(q.text, "");
        assert_eq!(q.question_type, QuestionType::ShortAnswer);
        assert_eq!(q.answer, Answer::Unset);
        assert!(q.children.is_empty());
    }

    #[test]
    fn test_add_root_appends() {
        let forest = Forest::new().add_root(id(1)).add_root(id(2));
        assert_eq!(forest.ids(), vec![id(1), id(2)]);
    }

    #[test]
    fn test_add_child_under_true_branch() {
        let forest = Forest::new()
            .add_root(id(1))
            .update_field(id(1), FieldUpdate::Type(QuestionType::TrueFalse))
            .update_field(id(1), FieldUpdate::Answer(Answer::True))
            .add_child(id(1), id(2));

        let root = &forest.roots()[0];
        assert_eq!(root.children, vec![Question::new(id(2))]);
    }

    #[test]
    fn test_add_child_nested_and_unknown() {
        let forest = sample();
        assert_eq!(forest.len(), 5);
        assert_eq!(forest.find(id(2)).unwrap().children[0].id, id(4));

        let unchanged = forest.add_child(id(99), id(100));
        assert_eq!(unchanged, forest);
    }

    #[test]
    fn test_update_isolation() {
        let forest = sample();
        let updated = forest.update_field(id(4), FieldUpdate::Text("deep".into()));

        assert_eq!(updated.find(id(4)).unwrap().text, "deep");
        assert_eq!(updated.find(id(4)).unwrap().question_type, QuestionType::ShortAnswer);
        // Siblings and unrelated roots are untouched
        assert_eq!(updated.find(id(3)), forest.find(id(3)));
        assert_eq!(updated.roots()[1], forest.roots()[1]);
        // Ancestors differ only through the rebuilt child
        assert_eq!(updated.find(id(2)).unwrap().text, forest.find(id(2)).unwrap().text);
        // Input forest is not mutated
        assert_eq!(forest.find(id(4)).unwrap().text, "");
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let forest = sample();
        assert_eq!(forest.update_field(id(42), FieldUpdate::Answer(Answer::False)), forest);
    }

    #[test]
    fn test_children_survive_answer_change() {
        let forest = Forest::new()
            .add_root(id(1))
            .update_field(id(1), FieldUpdate::Type(QuestionType::TrueFalse))
            .update_field(id(1), FieldUpdate::Answer(Answer::True))
            .add_child(id(1), id(2))
            .update_field(id(1), FieldUpdate::Answer(Answer::False));

        let root = forest.find(id(1)).unwrap();
        assert!(!root.offers_sub_question());
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_delete_root_with_child() {
        let forest = Forest::new().add_root(id(1)).add_child(id(1), id(2));
        let forest = forest.delete_subtree(id(1));
        assert!(forest.is_empty());
        assert!(!forest.contains(id(2)));
    }

    #[test]
    fn test_delete_removes_subtree_only() {
        let forest = sample();
        let pruned = forest.delete_subtree(id(2));

        assert!(!pruned.contains(id(2)));
        assert!(!pruned.contains(id(4)));
        assert_eq!(pruned.len(), forest.len() - 2);
        assert_eq!(pruned.find(id(3)), forest.find(id(3)));
        assert_eq!(pruned.roots()[1], forest.roots()[1]);
        assert_eq!(pruned.find(id(1)).unwrap().children.len(), 1);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let forest = sample();
        assert_eq!(forest.delete_subtree(id(77)), forest);
    }

    #[test]
    fn test_reorder_two_roots() {
        let forest = Forest::new().add_root(id(1)).add_root(id(2));
        let reordered = forest.reorder_roots(0, Some(1));
        assert_eq!(reordered.ids(), vec![id(2), id(1)]);
    }

    #[test]
    fn test_reorder_preserves_subtrees() {
        let forest = sample().add_root(id(6));
        let reordered = forest.reorder_roots(0, Some(2));

        let ids: Vec<_> = reordered.roots().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![id(5), id(6), id(1)]);
        assert_eq!(reordered.roots()[2], forest.roots()[0]);
        assert_eq!(reordered.len(), forest.len());
    }

    #[test]
    fn test_reorder_moves_backward() {
        let forest = sample().add_root(id(6));
        let reordered = forest.reorder_roots(2, Some(0));

        let ids: Vec<_> = reordered.roots().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![id(6), id(1), id(5)]);
        assert_eq!(reordered.roots()[1], forest.roots()[0]);
        assert_eq!(reordered.roots()[2], forest.roots()[1]);
        assert_eq!(reordered.len(), forest.len());
    }

    #[test]
    fn test_reorder_cancelled_and_out_of_range() {
        let forest = Forest::new().add_root(id(1)).add_root(id(2));
        assert_eq!(forest.reorder_roots(0, None), forest);
        assert_eq!(forest.reorder_roots(5, Some(0)), forest);
        assert_eq!(forest.reorder_roots(0, Some(9)).ids(), vec![id(2), id(1)]);
    }
}
