//! Read-only content store: questions, category metadata and the passage.

mod glaciers;

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{AnchorId, Passage, Question, QuestionCategory, QuestionId, QuestionKind};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Content integrity failures. These are authoring mistakes, surfaced when the
/// catalog is built rather than handled at runtime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no questions")]
    EmptyCatalog,

    #[error("question ids must be positive")]
    ZeroQuestionId,

    #[error("duplicate question id {0}")]
    DuplicateQuestionId(QuestionId),

    #[error("question {0} has an empty answer")]
    EmptyAnswer(QuestionId),

    #[error("multiple choice question {0} has no options")]
    MissingOptions(QuestionId),

    #[error("question {0} has options but is not multiple choice")]
    UnexpectedOptions(QuestionId),

    #[error("answer of question {0} is not one of its options")]
    AnswerNotInOptions(QuestionId),

    #[error("matching question {0} has no items or descriptions")]
    MissingMatches(QuestionId),

    #[error("question {0} has match items but is not a matching question")]
    UnexpectedMatches(QuestionId),

    #[error("answer of matching question {0} is not an item label")]
    AnswerNotInMatches(QuestionId),

    #[error("true/false question {0} must be answered True or False")]
    InvalidTruthValue(QuestionId),

    #[error("question {id} cites {anchor}, which is not in the passage")]
    UnresolvedAnchor { id: QuestionId, anchor: AnchorId },

    #[error("question {id} cites {anchor}, which appears more than once in the passage")]
    AmbiguousAnchor { id: QuestionId, anchor: AnchorId },

    #[error("no category metadata for {0}")]
    MissingCategory(QuestionKind),

    #[error("more than one category for {0}")]
    DuplicateCategory(QuestionKind),
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The immutable question catalog.
///
/// Built once through [`Catalog::new`], which enforces the integrity rules, and
/// shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<Question>,
    categories: Vec<QuestionCategory>,
    passage: Passage,
}

impl Catalog {
    /// Validate and assemble a catalog.
    ///
    /// Categories are reordered to `QuestionKind::ALL` order; questions keep
    /// the order they were given in.
    ///
    /// # Errors
    ///
    /// Returns the first `CatalogError` found.
    pub fn new(
        questions: Vec<Question>,
        categories: Vec<QuestionCategory>,
        passage: Passage,
    ) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if question.id().value() == 0 {
                return Err(CatalogError::ZeroQuestionId);
            }
            if !seen.insert(question.id()) {
                return Err(CatalogError::DuplicateQuestionId(question.id()));
            }
            validate_question(question, &passage)?;
        }

        let categories = order_categories(categories)?;

        Ok(Self {
            questions,
            categories,
            passage,
        })
    }

    /// The built-in glacier reading catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled content breaks an integrity rule.
    pub fn glaciers() -> Result<Self, CatalogError> {
        Self::new(
            glaciers::questions(),
            glaciers::categories(),
            glaciers::passage(),
        )
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Questions of one kind, in catalog order.
    pub fn questions_by_kind(&self, kind: QuestionKind) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.kind() == kind)
    }

    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// Category metadata for `kind`. Construction guarantees exactly one per kind.
    #[must_use]
    pub fn category(&self, kind: QuestionKind) -> &QuestionCategory {
        &self.categories[kind.index()]
    }

    /// Categories in tab order.
    #[must_use]
    pub fn categories(&self) -> &[QuestionCategory] {
        &self.categories
    }

    #[must_use]
    pub fn passage(&self) -> &Passage {
        &self.passage
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn validate_question(question: &Question, passage: &Passage) -> Result<(), CatalogError> {
    let id = question.id();
    if question.answer().trim().is_empty() {
        return Err(CatalogError::EmptyAnswer(id));
    }

    match question.kind() {
        QuestionKind::MultipleChoice => {
            if question.options().is_empty() {
                return Err(CatalogError::MissingOptions(id));
            }
            let answer = question.answer().to_lowercase();
            if !question
                .options()
                .iter()
                .any(|option| option.to_lowercase() == answer)
            {
                return Err(CatalogError::AnswerNotInOptions(id));
            }
        }
        _ if !question.options().is_empty() => {
            return Err(CatalogError::UnexpectedOptions(id));
        }
        _ => {}
    }

    match (question.kind(), question.matches()) {
        (QuestionKind::Matching, None) => return Err(CatalogError::MissingMatches(id)),
        (QuestionKind::Matching, Some(matches)) => {
            if matches.items.is_empty() || matches.descriptions.is_empty() {
                return Err(CatalogError::MissingMatches(id));
            }
            if !matches.has_label(question.answer()) {
                return Err(CatalogError::AnswerNotInMatches(id));
            }
        }
        (_, Some(_)) => return Err(CatalogError::UnexpectedMatches(id)),
        (_, None) => {}
    }

    if question.kind() == QuestionKind::TrueFalse {
        let answer = question.answer().to_lowercase();
        if answer != "true" && answer != "false" {
            return Err(CatalogError::InvalidTruthValue(id));
        }
    }

    let anchor = &question.reference().anchor;
    match passage.anchor_count(anchor) {
        0 => Err(CatalogError::UnresolvedAnchor {
            id,
            anchor: anchor.clone(),
        }),
        1 => Ok(()),
        _ => Err(CatalogError::AmbiguousAnchor {
            id,
            anchor: anchor.clone(),
        }),
    }
}

fn order_categories(
    categories: Vec<QuestionCategory>,
) -> Result<Vec<QuestionCategory>, CatalogError> {
    let mut slots: [Option<QuestionCategory>; 4] = [None, None, None, None];
    for category in categories {
        let slot = &mut slots[category.kind().index()];
        if slot.is_some() {
            return Err(CatalogError::DuplicateCategory(category.kind()));
        }
        *slot = Some(category);
    }

    QuestionKind::ALL
        .iter()
        .zip(slots)
        .map(|(kind, slot)| slot.ok_or(CatalogError::MissingCategory(*kind)))
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
