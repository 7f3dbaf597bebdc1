use quiz_core::model::{AnchorId, CategoryIcon, Question, QuestionId, QuestionKind, Segment};
use services::PracticeSession;

/// Everything the practice page can ask the session to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PracticeIntent {
    SelectKind(QuestionKind),
    SetAnswer(QuestionId, String),
    Reveal,
    TogglePassage,
    ToggleInstructions,
    ToggleDetails(QuestionKind),
    NavigateTo(AnchorId),
    ToggleTimer,
    PreviousMatch,
    NextMatch,
    GoToMatch(usize),
    ChooseMatch(String),
}

#[must_use]
pub fn category_glyph(icon: CategoryIcon) -> &'static str {
    match icon {
        CategoryIcon::CheckSquare => "☑",
        CategoryIcon::ListChecks => "☰",
        CategoryIcon::Type => "✎",
    }
}

//
// ─── PASSAGE ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentVm {
    pub text: String,
    pub anchor: Option<AnchorId>,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParagraphVm {
    pub label: String,
    pub segments: Vec<SegmentVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassageVm {
    pub title: String,
    pub anchor: AnchorId,
    pub expanded: bool,
    pub whole_highlighted: bool,
    pub paragraphs: Vec<ParagraphVm>,
}

#[must_use]
pub fn map_passage(session: &PracticeSession) -> PassageVm {
    let passage = session.catalog().passage();
    let paragraphs = passage
        .paragraphs()
        .iter()
        .map(|paragraph| ParagraphVm {
            label: format!("Paragraph {}", paragraph.label),
            segments: paragraph
                .segments
                .iter()
                .map(|segment| map_segment(session, segment))
                .collect(),
        })
        .collect();

    PassageVm {
        title: passage.title().to_string(),
        anchor: passage.anchor().clone(),
        expanded: session.is_passage_expanded(),
        whole_highlighted: session.is_highlighted(passage.anchor()),
        paragraphs,
    }
}

fn map_segment(session: &PracticeSession, segment: &Segment) -> SegmentVm {
    let anchor = segment.anchor().cloned();
    let highlighted = anchor
        .as_ref()
        .is_some_and(|anchor| session.is_highlighted(anchor));
    SegmentVm {
        text: segment.text().to_string(),
        anchor,
        highlighted,
    }
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTabVm {
    pub kind: QuestionKind,
    pub label: String,
    pub glyph: &'static str,
    pub active: bool,
}

#[must_use]
pub fn map_category_tabs(session: &PracticeSession) -> Vec<CategoryTabVm> {
    session
        .catalog()
        .categories()
        .iter()
        .map(|category| CategoryTabVm {
            kind: category.kind(),
            label: category.short_label().to_string(),
            glyph: category_glyph(category.icon()),
            active: category.kind() == session.active_kind(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchingStepVm {
    pub position_label: String,
    pub description: String,
    pub items: Vec<ChoiceVm>,
    pub dots: Vec<bool>,
    pub can_previous: bool,
    pub can_next: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerInputVm {
    Choices(Vec<ChoiceVm>),
    Text(String),
    /// `None` when the cursor sits on another matching question.
    Matching(Option<MatchingStepVm>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub answer: String,
    pub explanation: String,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: QuestionId,
    pub prompt: String,
    pub input: AnswerInputVm,
    pub feedback: Option<FeedbackVm>,
}

fn choices<'a>(values: impl Iterator<Item = (&'a str, String)>, current: &str) -> Vec<ChoiceVm> {
    values
        .map(|(value, label)| ChoiceVm {
            selected: value == current,
            value: value.to_string(),
            label,
        })
        .collect()
}

fn map_matching_step(session: &PracticeSession, question: &Question) -> Option<MatchingStepVm> {
    let step = session.matching_step()?;
    if step.question.id() != question.id() {
        return None;
    }
    let set = question.matches()?;
    let current = session.answer(question.id());
    let cursor = session.matching_cursor();
    Some(MatchingStepVm {
        position_label: format!("Description {} of {}", step.index + 1, step.total),
        description: step.description.to_string(),
        items: choices(
            set.items
                .iter()
                .map(|item| (item.label.as_str(), item.display())),
            current,
        ),
        dots: (0..cursor.len()).map(|index| index == cursor.index()).collect(),
        can_previous: !cursor.is_first(),
        can_next: !cursor.is_last(),
    })
}

#[must_use]
pub fn map_question(session: &PracticeSession, question: &Question) -> QuestionVm {
    let current = session.answer(question.id());
    let input = match question.kind() {
        QuestionKind::TrueFalse => AnswerInputVm::Choices(choices(
            ["True", "False"]
                .into_iter()
                .map(|value| (value, value.to_string())),
            current,
        )),
        QuestionKind::MultipleChoice => AnswerInputVm::Choices(choices(
            question
                .options()
                .iter()
                .map(|option| (option.as_str(), option.clone())),
            current,
        )),
        QuestionKind::Matching => AnswerInputVm::Matching(map_matching_step(session, question)),
        QuestionKind::FillBlank => AnswerInputVm::Text(current.to_string()),
    };

    let feedback = session.is_revealed().then(|| FeedbackVm {
        answer: question.answer().to_string(),
        explanation: question.explanation().to_string(),
        correct: session.is_correct(question),
    });

    QuestionVm {
        id: question.id(),
        prompt: format!("{}. {}", question.id(), question.text()),
        input,
        feedback,
    }
}

#[must_use]
pub fn map_active_questions(session: &PracticeSession) -> Vec<QuestionVm> {
    session
        .active_questions()
        .map(|question| map_question(session, question))
        .collect()
}

/// `Your Score: x / N`, only once answers are revealed.
#[must_use]
pub fn score_label(session: &PracticeSession) -> Option<String> {
    session
        .is_revealed()
        .then(|| format!("Your Score: {} / {}", session.score(), session.catalog().len()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KindScoreVm {
    pub label: String,
    pub score: String,
}

/// Per-category breakdown shown under the score; empty until revealed.
#[must_use]
pub fn map_score_breakdown(session: &PracticeSession) -> Vec<KindScoreVm> {
    if !session.is_revealed() {
        return Vec::new();
    }
    session
        .score_report()
        .by_kind
        .into_iter()
        .map(|score| KindScoreVm {
            label: session.category(score.kind).short_label().to_string(),
            score: format!("{} / {}", score.correct, score.total),
        })
        .collect()
}

//
// ─── DETAILED ANSWERS ──────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailItemVm {
    pub heading: String,
    pub answer_label: String,
    pub explanation: String,
    pub reference_label: String,
    pub reference_text: String,
    pub anchor: AnchorId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailCategoryVm {
    pub kind: QuestionKind,
    pub title: String,
    pub glyph: &'static str,
    pub open: bool,
    pub tips: Vec<String>,
    pub items: Vec<DetailItemVm>,
}

#[must_use]
pub fn map_detail_categories(session: &PracticeSession) -> Vec<DetailCategoryVm> {
    session
        .catalog()
        .categories()
        .iter()
        .map(|category| DetailCategoryVm {
            kind: category.kind(),
            title: category.title().to_string(),
            glyph: category_glyph(category.icon()),
            open: session.expanded_details() == Some(category.kind()),
            tips: category.tips().to_vec(),
            items: session
                .questions(category.kind())
                .map(|question| {
                    let reference = question.reference();
                    DetailItemVm {
                        heading: format!("Question {}: {}", question.id(), question.text()),
                        answer_label: format!("Correct Answer: {}", question.answer()),
                        explanation: question.explanation().to_string(),
                        reference_label: format!("Paragraph {}:", reference.paragraph),
                        reference_text: reference.text.clone(),
                        anchor: reference.anchor.clone(),
                    }
                })
                .collect(),
        })
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
