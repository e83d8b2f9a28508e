use std::time::Duration;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("countdown seconds must be between 1 and 600")]
    InvalidCountdownSeconds,

    #[error("timer tick must be between 10ms and 10s")]
    InvalidTick,

    #[error("feedback delay must be at most 60s")]
    InvalidFeedbackDelay,
}

//
// ─── TIMER ─────────────────────────────────────────────────────────────────────
//

const DEFAULT_COUNTDOWN_SECS: u32 = 10;
const DEFAULT_TICK: Duration = Duration::from_secs(1);
const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(2_000);

const MIN_TICK: Duration = Duration::from_millis(10);
const MAX_TICK: Duration = Duration::from_secs(10);
const MAX_FEEDBACK_DELAY: Duration = Duration::from_secs(60);

/// Per-question countdown configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerSettings {
    countdown_secs: u32,
    tick: Duration,
}

impl TimerSettings {
    /// # Errors
    ///
    /// Returns `SettingsError` when the countdown or tick is out of range.
    pub fn new(countdown_secs: u32, tick: Duration) -> Result<Self, SettingsError> {
        if !(1..=600).contains(&countdown_secs) {
            return Err(SettingsError::InvalidCountdownSeconds);
        }
        if !(MIN_TICK..=MAX_TICK).contains(&tick) {
            return Err(SettingsError::InvalidTick);
        }
        Ok(Self {
            countdown_secs,
            tick,
        })
    }

    #[must_use]
    pub fn countdown_secs(&self) -> u32 {
        self.countdown_secs
    }

    /// Wall-clock length of one countdown unit.
    #[must_use]
    pub fn tick(&self) -> Duration {
        self.tick
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            tick: DEFAULT_TICK,
        }
    }
}

//
// ─── GAME ──────────────────────────────────────────────────────────────────────
//

/// Feature set for a run of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSettings {
    timer: Option<TimerSettings>,
    feedback_delay: Duration,
}

impl GameSettings {
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidFeedbackDelay` if the delay is above 60s.
    pub fn new(
        timer: Option<TimerSettings>,
        feedback_delay: Duration,
    ) -> Result<Self, SettingsError> {
        if feedback_delay > MAX_FEEDBACK_DELAY {
            return Err(SettingsError::InvalidFeedbackDelay);
        }
        Ok(Self {
            timer,
            feedback_delay,
        })
    }

    /// No countdown, two second pause after each answer.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            timer: None,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        }
    }

    /// Ten second countdown per question.
    #[must_use]
    pub fn timed() -> Self {
        Self {
            timer: Some(TimerSettings::default()),
            ..Self::classic()
        }
    }

    #[must_use]
    pub fn with_timer(mut self, timer: Option<TimerSettings>) -> Self {
        self.timer = timer;
        self
    }

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidFeedbackDelay` if the delay is above 60s.
    pub fn with_feedback_delay(mut self, delay: Duration) -> Result<Self, SettingsError> {
        if delay > MAX_FEEDBACK_DELAY {
            return Err(SettingsError::InvalidFeedbackDelay);
        }
        self.feedback_delay = delay;
        Ok(self)
    }

    #[must_use]
    pub fn timer(&self) -> Option<TimerSettings> {
        self.timer
    }

    #[must_use]
    pub fn timer_enabled(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::classic()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
