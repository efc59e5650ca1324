use std::sync::Arc;

use reveal_core::model::Show;
use services::ShowRunner;

/// What the composition root (e.g. `crates/app`) hands the UI.
pub trait UiApp: Send + Sync {
    fn show(&self) -> Arc<Show>;
    fn runner(&self) -> Arc<ShowRunner>;
}

#[derive(Clone)]
pub struct AppContext {
    show: Arc<Show>,
    runner: Arc<ShowRunner>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            show: app.show(),
            runner: app.runner(),
        }
    }

    #[must_use]
    pub fn show(&self) -> Arc<Show> {
        Arc::clone(&self.show)
    }

    #[must_use]
    pub fn runner(&self) -> Arc<ShowRunner> {
        Arc::clone(&self.runner)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
