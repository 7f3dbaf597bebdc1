use crate::catalog::Catalog;
use crate::model::{Question, QuestionKind};
use crate::session::AnswerSheet;

/// Correct and total counts for one question kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindScore {
    pub kind: QuestionKind,
    pub correct: usize,
    pub total: usize,
}

/// Score of a whole answer sheet against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
    pub by_kind: Vec<KindScore>,
}

impl ScoreReport {
    #[must_use]
    pub fn kind(&self, kind: QuestionKind) -> Option<KindScore> {
        self.by_kind.iter().copied().find(|score| score.kind == kind)
    }
}

/// Case-insensitive exact comparison of a given answer with the canonical one.
#[must_use]
pub fn is_correct(question: &Question, given: &str) -> bool {
    given.to_lowercase() == question.answer().to_lowercase()
}

/// Number of catalog questions answered correctly, across every kind.
#[must_use]
pub fn score(catalog: &Catalog, answers: &AnswerSheet) -> usize {
    catalog
        .questions()
        .iter()
        .filter(|question| is_correct(question, answers.get(question.id())))
        .count()
}

#[must_use]
pub fn score_report(catalog: &Catalog, answers: &AnswerSheet) -> ScoreReport {
    let by_kind = QuestionKind::ALL
        .iter()
        .map(|kind| {
            let mut correct = 0;
            let mut total = 0;
            for question in catalog.questions_by_kind(*kind) {
                total += 1;
                if is_correct(question, answers.get(question.id())) {
                    correct += 1;
                }
            }
            KindScore {
                kind: *kind,
                correct,
                total,
            }
        })
        .collect::<Vec<_>>();

    let answered = catalog
        .questions()
        .iter()
        .filter(|question| answers.is_answered(question.id()))
        .count();

    ScoreReport {
        correct: by_kind.iter().map(|score| score.correct).sum(),
        answered,
        total: catalog.len(),
        by_kind,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
