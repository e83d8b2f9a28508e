use std::sync::Arc;

use services::GameLoopService;

pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    fn game_loop(&self) -> Arc<GameLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    game_loop: Arc<GameLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.title(),
            game_loop: app.game_loop(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
