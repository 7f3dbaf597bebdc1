use std::sync::Arc;

use quiz_core::Catalog;
use services::PracticeService;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn practice_service(&self) -> Arc<PracticeService>;
}

#[derive(Clone)]
pub struct AppContext {
    practice: Arc<PracticeService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            practice: app.practice_service(),
        }
    }

    #[must_use]
    pub fn practice_service(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        self.practice.catalog()
    }
}

// Provided by the application composition root (`crates/app`).

#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
