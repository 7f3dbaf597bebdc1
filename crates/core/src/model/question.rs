use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::ids::{AnchorId, QuestionId};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown question kind: {0}")]
pub struct ParseKindError(pub String);

//
// ─── QUESTION KIND ────────────────────────────────────────────────────────────
//

/// The closed set of question formats.
///
/// The kind decides which optional fields of a [`Question`] are populated and
/// how the answer is captured; scoring is the same for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuestionKind {
    TrueFalse,
    MultipleChoice,
    Matching,
    FillBlank,
}

impl QuestionKind {
    /// All kinds in category tab order.
    pub const ALL: [QuestionKind; 4] = [
        QuestionKind::TrueFalse,
        QuestionKind::MultipleChoice,
        QuestionKind::Matching,
        QuestionKind::FillBlank,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::TrueFalse => "true-false",
            QuestionKind::MultipleChoice => "multiple-choice",
            QuestionKind::Matching => "matching",
            QuestionKind::FillBlank => "fill-blanks",
        }
    }

    /// Position of this kind inside [`QuestionKind::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            QuestionKind::TrueFalse => 0,
            QuestionKind::MultipleChoice => 1,
            QuestionKind::Matching => 2,
            QuestionKind::FillBlank => 3,
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true-false" => Ok(Self::TrueFalse),
            "multiple-choice" => Ok(Self::MultipleChoice),
            "matching" => Ok(Self::Matching),
            "fill-blanks" | "fill-blank" => Ok(Self::FillBlank),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

//
// ─── REFERENCE ────────────────────────────────────────────────────────────────
//

/// Points a question at the passage span that justifies its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub paragraph: String,
    pub text: String,
    pub anchor: AnchorId,
}

impl Reference {
    #[must_use]
    pub fn new(paragraph: impl Into<String>, text: impl Into<String>, anchor: &str) -> Self {
        Self {
            paragraph: paragraph.into(),
            text: text.into(),
            anchor: AnchorId::new(anchor),
        }
    }
}

//
// ─── MATCHING ─────────────────────────────────────────────────────────────────
//

/// A labelled choice of a matching question (`A. Formation Process`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchItem {
    pub label: String,
    pub title: String,
}

impl MatchItem {
    #[must_use]
    pub fn new(label: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
        }
    }

    /// Display form used by the item list, e.g. `A. Formation Process`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}. {}", self.label, self.title)
    }
}

/// Items and descriptions of a matching question.
///
/// `items[i]` and `descriptions[i]` are not paired; the answer is a single
/// item label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSet {
    pub items: Vec<MatchItem>,
    pub descriptions: Vec<String>,
}

impl MatchSet {
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.label.to_lowercase() == label.to_lowercase())
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single immutable quiz item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    kind: QuestionKind,
    answer: String,
    options: Vec<String>,
    matches: Option<MatchSet>,
    reference: Reference,
    explanation: String,
}

impl Question {
    fn base(
        id: u32,
        kind: QuestionKind,
        text: impl Into<String>,
        answer: impl Into<String>,
        reference: Reference,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            kind,
            answer: answer.into(),
            options: Vec::new(),
            matches: None,
            reference,
            explanation: explanation.into(),
        }
    }

    #[must_use]
    pub fn true_false(
        id: u32,
        text: impl Into<String>,
        answer: impl Into<String>,
        reference: Reference,
        explanation: impl Into<String>,
    ) -> Self {
        Self::base(id, QuestionKind::TrueFalse, text, answer, reference, explanation)
    }

    #[must_use]
    pub fn multiple_choice(
        id: u32,
        text: impl Into<String>,
        answer: impl Into<String>,
        options: Vec<String>,
        reference: Reference,
        explanation: impl Into<String>,
    ) -> Self {
        let mut question = Self::base(
            id,
            QuestionKind::MultipleChoice,
            text,
            answer,
            reference,
            explanation,
        );
        question.options = options;
        question
    }

    #[must_use]
    pub fn matching(
        id: u32,
        text: impl Into<String>,
        answer: impl Into<String>,
        matches: MatchSet,
        reference: Reference,
        explanation: impl Into<String>,
    ) -> Self {
        let mut question =
            Self::base(id, QuestionKind::Matching, text, answer, reference, explanation);
        question.matches = Some(matches);
        question
    }

    #[must_use]
    pub fn fill_blank(
        id: u32,
        text: impl Into<String>,
        answer: impl Into<String>,
        reference: Reference,
        explanation: impl Into<String>,
    ) -> Self {
        Self::base(id, QuestionKind::FillBlank, text, answer, reference, explanation)
    }

    /// Attach options to any question. Only used to build malformed fixtures;
    /// catalog validation rejects options outside multiple choice.
    #[must_use]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn matches(&self) -> Option<&MatchSet> {
        self.matches.as_ref()
    }

    #[must_use]
    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_slugs_round_trip_through_from_str() {
        for kind in QuestionKind::ALL {
            assert_eq!(kind.as_str().parse::<QuestionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_parse_accepts_singular_fill_blank() {
        assert_eq!(
            "Fill-Blank".parse::<QuestionKind>().unwrap(),
            QuestionKind::FillBlank
        );
    }

    #[test]
    fn kind_parse_rejects_unknown() {
        let err = "essay".parse::<QuestionKind>().unwrap_err();
        assert_eq!(err, ParseKindError("essay".to_string()));
    }

    #[test]
    fn kind_index_matches_all_order() {
        for (position, kind) in QuestionKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
    }

    #[test]
    fn match_item_display_joins_label_and_title() {
        let item = MatchItem::new("C", "Movement Pattern");
        assert_eq!(item.display(), "C. Movement Pattern");
    }

    #[test]
    fn match_set_label_lookup_is_case_insensitive() {
        let set = MatchSet {
            items: vec![MatchItem::new("A", "Formation Process")],
            descriptions: vec!["Describes formation".to_string()],
        };
        assert!(set.has_label("a"));
        assert!(!set.has_label("B"));
    }

    #[test]
    fn constructors_populate_kind_specific_fields() {
        let reference = Reference::new("A", "excerpt", "para-a-1");
        let mc = Question::multiple_choice(
            6,
            "Pick one",
            "x",
            vec!["x".to_string(), "y".to_string()],
            reference.clone(),
            "because",
        );
        assert_eq!(mc.kind(), QuestionKind::MultipleChoice);
        assert_eq!(mc.options().len(), 2);
        assert!(mc.matches().is_none());

        let tf = Question::true_false(1, "Statement", "True", reference, "because");
        assert!(tf.options().is_empty());
        assert_eq!(tf.reference().anchor.as_str(), "para-a-1");
    }
}
