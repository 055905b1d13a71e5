//! Question Entity
//!
//! A single node of the question forest, with its sub-questions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique question identifier, stable for the lifetime of the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u64);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Question type determines which controls are offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QuestionType {
    /// Free text, no answer selector
    #[default]
    #[serde(rename = "Short Answer", alias = "ShortAnswer")]
    ShortAnswer,
    /// Answer selector with True/False, may branch into sub-questions
    #[serde(rename = "True/False", alias = "TrueFalse")]
    TrueFalse,
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [QuestionType::ShortAnswer, QuestionType::TrueFalse];

    /// Canonical name, used in the submitted summary
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::ShortAnswer => "ShortAnswer",
            QuestionType::TrueFalse => "TrueFalse",
        }
    }

    /// Human label shown in the type dropdown
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::ShortAnswer => "Short Answer",
            QuestionType::TrueFalse => "True/False",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ShortAnswer" | "Short Answer" => Ok(QuestionType::ShortAnswer),
            "TrueFalse" | "True/False" => Ok(QuestionType::TrueFalse),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

/// Answer to a true/false question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Answer {
    #[default]
    #[serde(rename = "")]
    Unset,
    True,
    False,
}

impl Answer {
    pub const ALL: [Answer; 3] = [Answer::Unset, Answer::True, Answer::False];

    /// Stored value; `Unset` is the empty string
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Unset => "",
            Answer::True => "True",
            Answer::False => "False",
        }
    }

    /// Label shown in the answer dropdown
    pub fn label(&self) -> &'static str {
        match self {
            Answer::Unset => "Select Answer",
            Answer::True => "True",
            Answer::False => "False",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Answer {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Answer::Unset),
            "True" => Ok(Answer::True),
            "False" => Ok(Answer::False),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

/// A dropdown value that matches no known option
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown option: {0:?}")]
pub struct UnknownOption(pub String);

/// A replacement for one editable field of a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Text(String),
    Type(QuestionType),
    Answer(Answer),
}

/// A question node with ordered sub-questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    #[serde(default)]
    pub children: Vec<Question>,
    #[serde(default)]
    pub answer: Answer,
}

impl Question {
    /// Create a question with default values
    pub fn new(id: QuestionId) -> Self {
        Self {
            id,
            text: String::new(),
            question_type: QuestionType::ShortAnswer,
            children: Vec::new(),
            answer: Answer::Unset,
        }
    }

    /// Copy of this question with one field replaced
    pub fn with_field(&self, update: FieldUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FieldUpdate::Text(text) => next.text = text,
            FieldUpdate::Type(question_type) => next.question_type = question_type,
            FieldUpdate::Answer(answer) => next.answer = answer,
        }
        next
    }

    /// Whether the answer dropdown is shown
    pub fn shows_answer(&self) -> bool {
        self.question_type == QuestionType::TrueFalse
    }

    /// Whether "Add Sub-question" is offered
    pub fn offers_sub_question(&self) -> bool {
        self.question_type == QuestionType::TrueFalse && self.answer == Answer::True
    }

    /// Number of nodes below this one
    pub fn descendant_count(&self) -> usize {
        self.children.iter().map(|c| 1 + c.descendant_count()).sum()
    }

    /// Visit this node and all descendants, depth-first
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Question)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
