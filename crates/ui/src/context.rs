use std::sync::Arc;

use services::TrackerService;

pub trait UiApp: Send + Sync {
    fn tracker(&self) -> Arc<TrackerService>;
}

#[derive(Clone)]
pub struct AppContext {
    tracker: Arc<TrackerService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            tracker: app.tracker(),
        }
    }

    #[must_use]
    pub fn tracker(&self) -> Arc<TrackerService> {
        Arc::clone(&self.tracker)
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.tracker.checklist().title().to_owned()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
