use std::sync::Arc;

use chrono::{DateTime, Utc};

use quiz_core::Catalog;
use quiz_core::model::{
    AnchorId, Question, QuestionCategory, QuestionId, QuestionKind, SessionSettings,
};
use quiz_core::navigator::{NavigationTicket, NavigatorEvent};
use quiz_core::scoring::{self, ScoreReport};
use quiz_core::session::{Cursor, MatchingStep, SessionState};
use quiz_core::timer::Countdown;

use super::progress::PracticeProgress;
use crate::Clock;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One practice run over the shared catalog.
///
/// Owns the mutable session state and the clock that timestamps navigation.
/// Every operation is infallible; odd input is simply scored as incorrect.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    catalog: Arc<Catalog>,
    state: SessionState,
    clock: Clock,
    started_at: DateTime<Utc>,
    revealed_at: Option<DateTime<Utc>>,
}

impl PracticeSession {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, settings: &SessionSettings, clock: Clock) -> Self {
        let state = SessionState::new(&catalog, settings);
        Self {
            catalog,
            state,
            clock,
            started_at: clock.now(),
            revealed_at: None,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn revealed_at(&self) -> Option<DateTime<Utc>> {
        self.revealed_at
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Mutable access to the clock, for advancing a fixed clock in tests.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    // ─── catalog views ───

    pub fn questions(&self, kind: QuestionKind) -> impl Iterator<Item = &Question> {
        self.catalog.questions_by_kind(kind)
    }

    pub fn active_questions(&self) -> impl Iterator<Item = &Question> {
        self.catalog.questions_by_kind(self.state.active_kind())
    }

    #[must_use]
    pub fn category(&self, kind: QuestionKind) -> &QuestionCategory {
        self.catalog.category(kind)
    }

    #[must_use]
    pub fn active_category(&self) -> &QuestionCategory {
        self.catalog.category(self.state.active_kind())
    }

    #[must_use]
    pub fn active_kind(&self) -> QuestionKind {
        self.state.active_kind()
    }

    pub fn select_kind(&mut self, kind: QuestionKind) {
        if self.state.active_kind() != kind {
            tracing::info!(from = %self.state.active_kind(), to = %kind, "category switched");
        }
        self.state.select_kind(kind);
    }

    // ─── answers & scoring ───

    pub fn set_answer(&mut self, id: QuestionId, value: impl Into<String>) {
        let value = value.into();
        tracing::trace!(question = %id, len = value.len(), "answer recorded");
        self.state.set_answer(id, value);
    }

    #[must_use]
    pub fn answer(&self, id: QuestionId) -> &str {
        self.state.answer(id)
    }

    /// Whether the current answer to `question` matches its canonical answer.
    #[must_use]
    pub fn is_correct(&self, question: &Question) -> bool {
        scoring::is_correct(question, self.state.answer(question.id()))
    }

    #[must_use]
    pub fn score(&self) -> usize {
        scoring::score(&self.catalog, self.state.answers())
    }

    #[must_use]
    pub fn score_report(&self) -> ScoreReport {
        scoring::score_report(&self.catalog, self.state.answers())
    }

    #[must_use]
    pub fn progress(&self) -> PracticeProgress {
        let total = self.catalog.len();
        let answered = self
            .catalog
            .questions()
            .iter()
            .filter(|question| self.state.answers().is_answered(question.id()))
            .count();
        PracticeProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_revealed: self.state.is_revealed(),
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    /// Reveal answers and return the score at that moment. Repeat calls keep
    /// the first reveal time.
    pub fn reveal(&mut self) -> ScoreReport {
        let report = self.score_report();
        if !self.state.is_revealed() {
            self.revealed_at = Some(self.clock.now());
            tracing::info!(
                correct = report.correct,
                answered = report.answered,
                total = report.total,
                remaining_secs = self.state.timer().remaining(),
                "answers revealed"
            );
        }
        self.state.reveal();
        report
    }

    // ─── panels ───

    #[must_use]
    pub fn is_passage_expanded(&self) -> bool {
        self.state.is_passage_expanded()
    }

    pub fn toggle_passage(&mut self) {
        self.state.toggle_passage();
    }

    #[must_use]
    pub fn instructions_visible(&self) -> bool {
        self.state.instructions_visible()
    }

    pub fn toggle_instructions(&mut self) {
        self.state.toggle_instructions();
    }

    #[must_use]
    pub fn expanded_details(&self) -> Option<QuestionKind> {
        self.state.expanded_details()
    }

    pub fn toggle_details(&mut self, kind: QuestionKind) {
        self.state.toggle_details(kind);
    }

    // ─── reference navigation ───

    /// Jump to `anchor` at the clock's current time.
    pub fn navigate_to(&mut self, anchor: AnchorId) -> NavigationTicket {
        let now = self.clock.now();
        let ticket = self.state.navigate_to(anchor, now);
        tracing::debug!(
            anchor = %ticket.anchor,
            generation = ticket.generation,
            "reference navigation"
        );
        ticket
    }

    /// Fire whatever scroll or clear is due at the clock's current time.
    pub fn poll_navigation(&mut self) -> Vec<NavigatorEvent> {
        let now = self.clock.now();
        let events = self.state.poll_navigation(now);
        events.iter().for_each(trace_navigation);
        events
    }

    /// Fire the scroll for `ticket` once the caller's own delay has elapsed.
    pub fn fire_scroll(&mut self, ticket: &NavigationTicket) -> Option<NavigatorEvent> {
        let event = self.state.fire_scroll(ticket);
        event.iter().for_each(trace_navigation);
        event
    }

    /// Clear the highlight for `ticket` once the caller's own delay has elapsed.
    pub fn fire_clear(&mut self, ticket: &NavigationTicket) -> Option<NavigatorEvent> {
        let event = self.state.fire_clear(ticket);
        event.iter().for_each(trace_navigation);
        event
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&AnchorId> {
        self.state.highlighted()
    }

    #[must_use]
    pub fn is_highlighted(&self, anchor: &AnchorId) -> bool {
        self.state.navigator().is_highlighted(anchor)
    }

    #[must_use]
    pub fn is_navigation_current(&self, ticket: &NavigationTicket) -> bool {
        self.state.navigator().is_current(ticket)
    }

    // ─── timer ───

    #[must_use]
    pub fn timer(&self) -> &Countdown {
        self.state.timer()
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        self.state.timer().label()
    }

    pub fn start_timer(&mut self) {
        if !self.state.timer().is_running() {
            tracing::debug!(remaining = self.state.timer().remaining(), "timer started");
        }
        self.state.start_timer();
    }

    pub fn pause_timer(&mut self) {
        if self.state.timer().is_running() {
            tracing::debug!(remaining = self.state.timer().remaining(), "timer paused");
        }
        self.state.pause_timer();
    }

    pub fn toggle_timer(&mut self) {
        if self.state.timer().is_running() {
            self.pause_timer();
        } else {
            self.start_timer();
        }
    }

    /// One elapsed second. Returns true if the remaining time changed.
    pub fn tick_timer(&mut self) -> bool {
        let changed = self.state.tick_timer();
        if changed && self.state.timer().is_expired() {
            tracing::info!("timer reached zero");
        }
        changed
    }

    // ─── matching stepper ───

    #[must_use]
    pub fn matching_cursor(&self) -> &Cursor {
        self.state.matching_cursor()
    }

    #[must_use]
    pub fn matching_step(&self) -> Option<MatchingStep<'_>> {
        self.state.matching_step(&self.catalog)
    }

    pub fn next_match(&mut self) {
        self.state.next_match();
    }

    pub fn previous_match(&mut self) {
        self.state.previous_match();
    }

    pub fn go_to_match(&mut self, index: usize) {
        self.state.go_to_match(index);
    }

    /// Answer the matching question under the cursor with an item label.
    pub fn choose_match(&mut self, label: &str) {
        let Some(id) = self.matching_step().map(|step| step.question.id()) else {
            return;
        };
        self.set_answer(id, label);
    }
}

fn trace_navigation(event: &NavigatorEvent) {
    match event {
        NavigatorEvent::ScrollIntoView(anchor) => {
            tracing::trace!(%anchor, "scroll due");
        }
        NavigatorEvent::HighlightCleared(anchor) => {
            tracing::trace!(%anchor, "highlight cleared");
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
