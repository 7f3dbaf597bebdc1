//! Per-session mutable state layered over the immutable catalog.

mod answers;
mod cursor;

pub use answers::AnswerSheet;
pub use cursor::Cursor;

use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::model::{AnchorId, Question, QuestionId, QuestionKind, SessionSettings};
use crate::navigator::{NavigationTicket, NavigatorEvent, ReferenceNavigator};
use crate::timer::Countdown;

/// The matching step currently under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingStep<'a> {
    pub question: &'a Question,
    pub description: &'a str,
    pub index: usize,
    pub total: usize,
}

/// Number of matching steps: one per description of each matching question.
#[must_use]
pub fn matching_step_count(catalog: &Catalog) -> usize {
    catalog
        .questions_by_kind(QuestionKind::Matching)
        .filter_map(Question::matches)
        .map(|set| set.descriptions.len())
        .sum()
}

fn matching_step_at(catalog: &Catalog, index: usize) -> Option<(&Question, &str)> {
    catalog
        .questions_by_kind(QuestionKind::Matching)
        .filter_map(|question| question.matches().map(|set| (question, set)))
        .flat_map(|(question, set)| {
            set.descriptions
                .iter()
                .map(move |description| (question, description.as_str()))
        })
        .nth(index)
}

/// Everything a single practice run tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    answers: AnswerSheet,
    active_kind: QuestionKind,
    matching_cursor: Cursor,
    revealed: bool,
    passage_expanded: bool,
    instructions_visible: bool,
    expanded_details: Option<QuestionKind>,
    navigator: ReferenceNavigator,
    timer: Countdown,
}

impl SessionState {
    #[must_use]
    pub fn new(catalog: &Catalog, settings: &SessionSettings) -> Self {
        Self {
            answers: AnswerSheet::new(),
            active_kind: settings.initial_kind(),
            matching_cursor: Cursor::new(matching_step_count(catalog)),
            revealed: false,
            passage_expanded: true,
            instructions_visible: false,
            expanded_details: None,
            navigator: ReferenceNavigator::from_settings(settings),
            timer: Countdown::new(settings.timer_start_secs()),
        }
    }

    // ─── answers ───

    pub fn set_answer(&mut self, id: QuestionId, value: impl Into<String>) {
        self.answers.set(id, value);
    }

    #[must_use]
    pub fn answer(&self, id: QuestionId) -> &str {
        self.answers.get(id)
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    // ─── view flags ───

    #[must_use]
    pub fn active_kind(&self) -> QuestionKind {
        self.active_kind
    }

    pub fn select_kind(&mut self, kind: QuestionKind) {
        self.active_kind = kind;
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// One-way: there is no way back to the unrevealed state.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    #[must_use]
    pub fn is_passage_expanded(&self) -> bool {
        self.passage_expanded
    }

    pub fn toggle_passage(&mut self) {
        self.passage_expanded = !self.passage_expanded;
    }

    #[must_use]
    pub fn instructions_visible(&self) -> bool {
        self.instructions_visible
    }

    pub fn toggle_instructions(&mut self) {
        self.instructions_visible = !self.instructions_visible;
    }

    #[must_use]
    pub fn expanded_details(&self) -> Option<QuestionKind> {
        self.expanded_details
    }

    /// Accordion: at most one category's detailed answers are open.
    pub fn toggle_details(&mut self, kind: QuestionKind) {
        self.expanded_details = if self.expanded_details == Some(kind) {
            None
        } else {
            Some(kind)
        };
    }

    // ─── navigation ───

    /// Expand the passage and highlight `anchor`, replacing any pending
    /// scroll or clear from an earlier call.
    pub fn navigate_to(&mut self, anchor: AnchorId, now: DateTime<Utc>) -> NavigationTicket {
        self.passage_expanded = true;
        self.navigator.navigate_to(anchor, now)
    }

    pub fn poll_navigation(&mut self, now: DateTime<Utc>) -> Vec<NavigatorEvent> {
        self.navigator.poll(now)
    }

    pub fn fire_scroll(&mut self, ticket: &NavigationTicket) -> Option<NavigatorEvent> {
        self.navigator.fire_scroll(ticket)
    }

    pub fn fire_clear(&mut self, ticket: &NavigationTicket) -> Option<NavigatorEvent> {
        self.navigator.fire_clear(ticket)
    }

    #[must_use]
    pub fn navigator(&self) -> &ReferenceNavigator {
        &self.navigator
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&AnchorId> {
        self.navigator.highlighted()
    }

    // ─── timer ───

    #[must_use]
    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    pub fn start_timer(&mut self) {
        self.timer.start();
    }

    pub fn pause_timer(&mut self) {
        self.timer.pause();
    }

    pub fn toggle_timer(&mut self) {
        self.timer.toggle();
    }

    pub fn tick_timer(&mut self) -> bool {
        self.timer.tick()
    }

    // ─── matching cursor ───

    #[must_use]
    pub fn matching_cursor(&self) -> &Cursor {
        &self.matching_cursor
    }

    pub fn next_match(&mut self) {
        self.matching_cursor.next();
    }

    pub fn previous_match(&mut self) {
        self.matching_cursor.previous();
    }

    pub fn go_to_match(&mut self, index: usize) {
        self.matching_cursor.go_to(index);
    }

    /// Resolve the step under the cursor, or `None` when there are no
    /// matching questions.
    #[must_use]
    pub fn matching_step<'a>(&self, catalog: &'a Catalog) -> Option<MatchingStep<'a>> {
        let index = self.matching_cursor.index();
        matching_step_at(catalog, index).map(|(question, description)| MatchingStep {
            question,
            description,
            index,
            total: self.matching_cursor.len(),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
