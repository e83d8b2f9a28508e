use std::fmt;
use std::time::Duration;

use quiz_core::model::{GameSession, GameSettings, GameSummary};
use quiz_core::{Countdown, CountdownTick};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::feedback::{Outcome, Resolution, StatusMessage};
use super::phase::GamePhase;
use super::presenter::PresentedQuestion;
use super::schedule::{ScheduledTransition, Step, TransitionKind, TransitionToken};
use crate::error::{GameError, LoadError};

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Owns everything one game needs: the session, the presented question, the
/// countdown and the epoch that keeps delayed transitions honest.
///
/// The controller never sleeps. Operations that need a delay return
/// [`Step::Scheduled`]; the host waits and calls [`GameController::fire`] with
/// the token. Any phase change in between makes that token stale, so a timer
/// can never resolve a question the player already answered.
pub struct GameController {
    settings: GameSettings,
    phase: GamePhase,
    session: Option<GameSession>,
    current: Option<PresentedQuestion>,
    resolution: Option<Resolution>,
    countdown: Option<Countdown>,
    summary: Option<GameSummary>,
    message: StatusMessage,
    epoch: u64,
    rng: StdRng,
}

impl GameController {
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    /// Deterministic option order, for tests and replays.
    #[must_use]
    pub fn with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: GameSettings, rng: StdRng) -> Self {
        Self {
            settings,
            phase: GamePhase::Idle,
            session: None,
            current: None,
            resolution: None,
            countdown: None,
            summary: None,
            message: StatusMessage::welcome(),
            epoch: 0,
            rng,
        }
    }

    #[must_use]
    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn message(&self) -> &StatusMessage {
        &self.message
    }

    /// The question on screen, while presenting or showing feedback.
    #[must_use]
    pub fn current(&self) -> Option<&PresentedQuestion> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    /// Seconds left on the countdown, when the timer is running.
    #[must_use]
    pub fn remaining_secs(&self) -> Option<u32> {
        self.countdown.map(|countdown| countdown.remaining())
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.session.as_ref().map_or(0, GameSession::score)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.session.as_ref().map_or(0, GameSession::total)
    }

    /// Final tally, once the game is over.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        self.summary
    }

    #[must_use]
    pub fn accepts_answers(&self) -> bool {
        self.phase.accepts_answers()
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Idle → Loading.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidPhase` unless idle.
    pub fn begin_loading(&mut self) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Idle, "start")?;
        self.set_phase(GamePhase::Loading);
        self.message = StatusMessage::loading();
        Ok(())
    }

    /// Loading → Idle, leaving the start control available for a retry.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidPhase` unless loading.
    pub fn load_failed(&mut self, err: &LoadError) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Loading, "report a load failure")?;
        log::error!("failed to load questions: {err}");
        self.set_phase(GamePhase::Idle);
        self.message = StatusMessage::load_failed(err);
        Ok(())
    }

    /// Loading → Presenting with a freshly loaded session.
    ///
    /// An empty session goes straight to game over.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidPhase` unless loading.
    pub fn start(&mut self, session: GameSession) -> Result<Step, GameError> {
        self.expect_phase(GamePhase::Loading, "start a session")?;
        log::info!("starting game with {} questions", session.total());
        self.session = Some(session);
        self.summary = None;
        self.present_next()
    }

    /// Player picked `option` for the current question.
    ///
    /// Selections outside the presenting phase are ignored: the question is
    /// already resolved and its options are disabled.
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnknownOption` if `option` is not one of the
    /// current question's options.
    pub fn select(&mut self, option: &str) -> Result<Step, GameError> {
        let current = match self.current.as_ref() {
            Some(current) if self.phase.accepts_answers() => current,
            _ => {
                log::debug!("ignoring selection {option:?} while {:?}", self.phase);
                return Ok(Step::Ignored);
            }
        };
        if !current.has_option(option) {
            return Err(GameError::UnknownOption(option.to_string()));
        }
        let outcome = if current.is_correct(option) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        Ok(self.resolve(outcome, Some(option.to_string())))
    }

    /// Fire a previously scheduled transition.
    ///
    /// Stale tokens are ignored.
    ///
    /// # Errors
    ///
    /// Propagates `GameError::Summary` when finishing the game.
    pub fn fire(&mut self, token: TransitionToken) -> Result<Step, GameError> {
        if token.epoch() != self.epoch {
            log::debug!(
                "ignoring stale {:?} token (epoch {} != {})",
                token.kind(),
                token.epoch(),
                self.epoch
            );
            return Ok(Step::Ignored);
        }
        match token.kind() {
            TransitionKind::Tick => Ok(self.tick()),
            TransitionKind::Advance => self.advance(),
        }
    }

    /// GameOver → Idle. Drops the session; the next start reloads everything.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidPhase` unless the game is over.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.expect_phase(GamePhase::GameOver, "restart")?;
        self.session = None;
        self.summary = None;
        self.current = None;
        self.resolution = None;
        self.countdown = None;
        self.set_phase(GamePhase::Idle);
        self.message = StatusMessage::press_start();
        Ok(())
    }

    //
    // ─── INTERNALS ─────────────────────────────────────────────────────────────
    //

    fn tick(&mut self) -> Step {
        if !self.phase.accepts_answers() {
            return Step::Ignored;
        }
        let (Some(countdown), Some(timer)) = (self.countdown.as_mut(), self.settings.timer())
        else {
            return Step::Ignored;
        };
        match countdown.tick() {
            CountdownTick::Running { .. } => self.schedule(TransitionKind::Tick, timer.tick()),
            CountdownTick::Expired => self.resolve(Outcome::TimedOut, None),
        }
    }

    fn advance(&mut self) -> Result<Step, GameError> {
        if self.phase != GamePhase::Answered {
            return Ok(Step::Ignored);
        }
        self.present_next()
    }

    fn resolve(&mut self, outcome: Outcome, selected: Option<String>) -> Step {
        self.countdown = None;
        if outcome.is_correct() {
            if let Some(session) = self.session.as_mut() {
                session.record_correct();
            }
        }
        let answer = self
            .current
            .as_ref()
            .map(|current| current.answer().to_string())
            .unwrap_or_default();
        self.message = StatusMessage::resolved(outcome, &answer);
        self.resolution = Some(Resolution { outcome, selected });
        self.set_phase(GamePhase::Answered);
        self.schedule(TransitionKind::Advance, self.settings.feedback_delay())
    }

    fn present_next(&mut self) -> Result<Step, GameError> {
        self.resolution = None;
        self.countdown = None;

        let next = self.session.as_mut().and_then(|session| {
            let question = session.next_question()?;
            Some((question, session.counter(), session.total()))
        });
        let Some((question, number, total)) = next else {
            return self.finish();
        };

        self.current = Some(PresentedQuestion::present(question, number, &mut self.rng));
        self.message = StatusMessage::question_progress(number, total);
        self.set_phase(GamePhase::Presenting);

        match self.settings.timer() {
            Some(timer) => {
                self.countdown = Some(Countdown::new(timer.countdown_secs()));
                Ok(self.schedule(TransitionKind::Tick, timer.tick()))
            }
            None => Ok(Step::Settled),
        }
    }

    fn finish(&mut self) -> Result<Step, GameError> {
        let summary = match self.session.as_ref() {
            Some(session) => session.summary()?,
            None => GameSummary::new(0, 0)?,
        };
        log::info!("game over: {} of {}", summary.score(), summary.total());
        self.current = None;
        self.summary = Some(summary);
        self.message = StatusMessage::game_over(&summary);
        self.set_phase(GamePhase::GameOver);
        Ok(Step::Settled)
    }

    fn schedule(&mut self, kind: TransitionKind, delay: Duration) -> Step {
        self.bump_epoch();
        let token = TransitionToken::new(self.epoch, kind);
        Step::Scheduled(ScheduledTransition::new(token, delay))
    }

    fn set_phase(&mut self, phase: GamePhase) {
        log::debug!("game phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.bump_epoch();
    }

    fn bump_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn expect_phase(&self, expected: GamePhase, action: &'static str) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                action,
                phase: self.phase,
            })
        }
    }
}

impl fmt::Debug for GameController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameController")
            .field("phase", &self.phase)
            .field("score", &self.score())
            .field("total", &self.total())
            .field("current", &self.current.as_ref().map(PresentedQuestion::number))
            .field("remaining_secs", &self.remaining_secs())
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
