use std::sync::Arc;

use quiz_core::Catalog;
use quiz_core::model::SessionSettings;

use super::session::PracticeSession;
use crate::Clock;
use crate::error::PracticeError;

/// Hands out fresh practice sessions over one shared, immutable catalog.
#[derive(Debug, Clone)]
pub struct PracticeService {
    catalog: Arc<Catalog>,
    settings: SessionSettings,
    clock: Clock,
}

impl PracticeService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, settings: SessionSettings, clock: Clock) -> Self {
        Self {
            catalog,
            settings,
            clock,
        }
    }

    /// Service over the built-in glacier catalog.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Catalog` if the bundled content fails validation.
    pub fn glaciers(settings: SessionSettings, clock: Clock) -> Result<Self, PracticeError> {
        let catalog = Catalog::glaciers()?;
        tracing::debug!(
            questions = catalog.len(),
            anchors = catalog.passage().anchors().count(),
            "glacier catalog validated"
        );
        Ok(Self::new(Arc::new(catalog), settings, clock))
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Start a new session: every answer empty, timer stopped at its start value.
    #[must_use]
    pub fn start_session(&self) -> PracticeSession {
        let session = PracticeSession::new(Arc::clone(&self.catalog), &self.settings, self.clock);
        tracing::debug!(
            timer_secs = self.settings.timer_start_secs(),
            initial = %self.settings.initial_kind(),
            "practice session started"
        );
        session
    }
}

#[cfg(test)]
mod tests {
    use quiz_core::model::QuestionKind;
    use quiz_core::time::fixed_clock;

    use super::*;

    #[test]
    fn sessions_share_catalog_but_not_state() {
        let service = PracticeService::glaciers(SessionSettings::default(), fixed_clock()).unwrap();
        let mut first = service.start_session();
        let second = service.start_session();

        let id = first.catalog().questions()[0].id();
        first.set_answer(id, "True");
        assert_eq!(first.answer(id), "True");
        assert_eq!(second.answer(id), "");
        assert!(Arc::ptr_eq(first.catalog(), second.catalog()));
    }

    #[test]
    fn settings_pick_initial_category_and_timer() {
        let settings = SessionSettings::default()
            .with_timer_start_secs(90)
            .unwrap()
            .with_initial_kind(QuestionKind::Matching);
        let service = PracticeService::glaciers(settings, fixed_clock()).unwrap();
        let session = service.start_session();
        assert_eq!(session.active_kind(), QuestionKind::Matching);
        assert_eq!(session.timer_label(), "1:30");
    }
}
