use std::sync::Arc;

use quiz_core::model::{GameSession, GameSettings};
use storage::repository::QuestionRepository;

use super::controller::GameController;
use super::schedule::Step;
use crate::error::{GameError, LoadError};

/// Loads question sets and hands out controllers configured for this run.
#[derive(Clone)]
pub struct GameLoopService {
    settings: GameSettings,
    questions: Arc<dyn QuestionRepository>,
    seed: Option<u64>,
}

impl GameLoopService {
    #[must_use]
    pub fn new(settings: GameSettings, questions: Arc<dyn QuestionRepository>) -> Self {
        Self {
            settings,
            questions,
            seed: None,
        }
    }

    /// Fix the option shuffle seed for every controller this service builds.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// A fresh idle controller.
    #[must_use]
    pub fn new_controller(&self) -> GameController {
        match self.seed {
            Some(seed) => GameController::with_seed(self.settings, seed),
            None => GameController::new(self.settings),
        }
    }

    /// Fetch the question set and wrap it in a new session with score 0.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source cannot be read or decoded.
    pub async fn load_session(&self) -> Result<GameSession, LoadError> {
        let questions = self.questions.load_questions().await?;
        log::info!("loaded {} questions", questions.len());
        Ok(GameSession::new(questions))
    }

    /// Drive `controller` through loading: Idle → Loading → Presenting, or
    /// back to Idle with the error message when the load fails.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidPhase` if the controller is not idle.
    pub async fn start_game(&self, controller: &mut GameController) -> Result<Step, GameError> {
        controller.begin_loading()?;
        match self.load_session().await {
            Ok(session) => controller.start(session),
            Err(err) => {
                controller.load_failed(&err)?;
                Ok(Step::Settled)
            }
        }
    }
}
