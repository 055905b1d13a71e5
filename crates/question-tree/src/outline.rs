//! Outline Rendering
//!
//! Flattens the forest into numbered rows for the editor and the
//! submitted summary. Roots are numbered `Q1`, `Q2`, ...; a child extends its
//! parent's label with `.n`.

use crate::forest::Forest;
use crate::question::{Answer, Question, QuestionId, QuestionType};

/// One question in display order, with its depth and label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutlineRow {
    pub id: QuestionId,
    pub depth: usize,
    pub label: String,
    /// Index of the root this row belongs to
    pub root_index: usize,
    pub question_type: QuestionType,
    pub answer: Answer,
    pub has_children: bool,
    pub offers_sub_question: bool,
}

/// Read-only summary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub id: QuestionId,
    pub depth: usize,
    pub text: String,
}

/// Label of the `index`-th child under `parent`, or of a root when `parent` is None
pub fn label_for(parent: Option<&str>, index: usize) -> String {
    match parent {
        Some(prefix) => format!("{}.{}", prefix, index + 1),
        None => format!("Q{}", index + 1),
    }
}

/// Rows in depth-first display order
pub fn outline(forest: &Forest) -> Vec<OutlineRow> {
    fn collect(
        nodes: &[Question],
        parent: Option<&str>,
        depth: usize,
        root_index: Option<usize>,
        result: &mut Vec<OutlineRow>,
    ) {
        for (index, question) in nodes.iter().enumerate() {
            let label = label_for(parent, index);
            let root_index = root_index.unwrap_or(index);
            result.push(OutlineRow {
                id: question.id,
                depth,
                label: label.clone(),
                root_index,
                question_type: question.question_type,
                answer: question.answer,
                has_children: !question.children.is_empty(),
                offers_sub_question: question.offers_sub_question(),
            });
            collect(&question.children, Some(&label), depth + 1, Some(root_index), result);
        }
    }

    let mut result = Vec::with_capacity(forest.len());
    collect(forest.roots(), None, 0, None, &mut result);
    result
}

/// `{label}: {text} ({type})`, with ` - Answer: {answer}` for true/false
pub fn summary_text(label: &str, question: &Question) -> String {
    let mut line = format!("{}: {} ({})", label, question.text, question.question_type);
    if question.question_type == QuestionType::TrueFalse {
        line.push_str(" - Answer: ");
        line.push_str(question.answer.as_str());
    }
    line
}

/// Summary lines in display order
pub fn summary(forest: &Forest) -> Vec<SummaryLine> {
    fn collect(nodes: &[Question], parent: Option<&str>, depth: usize, result: &mut Vec<SummaryLine>) {
        for (index, question) in nodes.iter().enumerate() {
            let label = label_for(parent, index);
            result.push(SummaryLine {
                id: question.id,
                depth,
                text: summary_text(&label, question),
            });
            collect(&question.children, Some(&label), depth + 1, result);
        }
    }

    let mut result = Vec::with_capacity(forest.len());
    collect(forest.roots(), None, 0, &mut result);
    result
}
