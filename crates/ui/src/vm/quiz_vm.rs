use quiz_core::model::GameSession;
use services::{
    GameController, GamePhase, LoadError, Outcome, Step, Tone, TransitionToken,
};

use crate::views::ViewError;
use crate::vm::time_fmt::format_remaining;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Select(String),
    Restart,
}

/// One answer button as rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub class: &'static str,
    pub disabled: bool,
}

pub struct QuizVm {
    controller: GameController,
}

impl QuizVm {
    #[must_use]
    pub fn new(controller: GameController) -> Self {
        Self { controller }
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.controller.phase()
    }

    #[must_use]
    pub fn show_start(&self) -> bool {
        self.phase().can_start()
    }

    #[must_use]
    pub fn show_restart(&self) -> bool {
        self.phase().is_over()
    }

    #[must_use]
    pub fn message_text(&self) -> &str {
        self.controller.message().text()
    }

    #[must_use]
    pub fn message_class(&self) -> &'static str {
        match self.controller.message().tone() {
            Tone::Info => "alert alert-info",
            Tone::Primary => "alert alert-primary",
            Tone::Success => "alert alert-success",
            Tone::Danger => "alert alert-danger",
            Tone::Warning => "alert alert-warning",
        }
    }

    #[must_use]
    pub fn question_text(&self) -> Option<&str> {
        self.controller.current().map(|current| current.text())
    }

    /// Options in display order. Once the question is resolved every button
    /// is disabled and the correct answer is highlighted.
    #[must_use]
    pub fn options(&self) -> Vec<OptionVm> {
        let Some(current) = self.controller.current() else {
            return Vec::new();
        };
        let resolution = self.controller.resolution();
        let disabled = !self.controller.accepts_answers();

        current
            .options()
            .iter()
            .map(|label| {
                let class = match resolution {
                    None => "btn btn-outline-primary",
                    Some(_) if current.is_correct(label) => "btn btn-success",
                    Some(res)
                        if res.outcome == Outcome::Incorrect
                            && res.selected.as_deref() == Some(label.as_str()) =>
                    {
                        "btn btn-danger"
                    }
                    Some(_) => "btn btn-outline-secondary",
                };
                OptionVm {
                    label: label.clone(),
                    class,
                    disabled,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn timer_label(&self) -> Option<String> {
        self.controller.remaining_secs().map(format_remaining)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if a game is already running.
    pub fn begin_loading(&mut self) -> Result<(), ViewError> {
        self.controller.begin_loading().map_err(|err| {
            log::warn!("start ignored: {err}");
            ViewError::Unknown
        })
    }

    /// Apply the result of the question fetch.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the controller was not loading.
    pub fn finish_loading(
        &mut self,
        loaded: Result<GameSession, LoadError>,
    ) -> Result<Step, ViewError> {
        let result = match loaded {
            Ok(session) => self.controller.start(session),
            Err(err) => self.controller.load_failed(&err).map(|()| Step::Settled),
        };
        result.map_err(|err| {
            log::error!("failed to apply loaded questions: {err}");
            ViewError::Unknown
        })
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the option does not belong to the
    /// current question.
    pub fn select(&mut self, option: &str) -> Result<Step, ViewError> {
        self.controller.select(option).map_err(|err| {
            log::error!("selection rejected: {err}");
            ViewError::Unknown
        })
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the game could not be finished.
    pub fn fire(&mut self, token: TransitionToken) -> Result<Step, ViewError> {
        self.controller.fire(token).map_err(|err| {
            log::error!("scheduled transition failed: {err}");
            ViewError::Unknown
        })
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` unless the game is over.
    pub fn restart(&mut self) -> Result<(), ViewError> {
        self.controller.restart().map_err(|err| {
            log::warn!("restart ignored: {err}");
            ViewError::Unknown
        })
    }
}
