use std::time::Duration;

/// What a scheduled transition does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// One countdown unit elapsed.
    Tick,
    /// Feedback pause is over; move to the next question or to game over.
    Advance,
}

/// Handle for a delayed transition.
///
/// Only the most recently issued token is live. Every phase change and every
/// new token moves the controller epoch forward, which turns older tokens into
/// no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionToken {
    epoch: u64,
    kind: TransitionKind,
}

impl TransitionToken {
    pub(crate) fn new(epoch: u64, kind: TransitionKind) -> Self {
        Self { epoch, kind }
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }
}

/// A transition the host must fire after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTransition {
    token: TransitionToken,
    delay: Duration,
}

impl ScheduledTransition {
    pub(crate) fn new(token: TransitionToken, delay: Duration) -> Self {
        Self { token, delay }
    }

    #[must_use]
    pub fn token(&self) -> TransitionToken {
        self.token
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// What the host has to do after driving the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Sleep for the given delay, then fire its token.
    Scheduled(ScheduledTransition),
    /// Nothing pending; wait for player input.
    Settled,
    /// The request was stale or out of phase and changed nothing.
    Ignored,
}

impl Step {
    #[must_use]
    pub fn scheduled(self) -> Option<ScheduledTransition> {
        match self {
            Step::Scheduled(scheduled) => Some(scheduled),
            Step::Settled | Step::Ignored => None,
        }
    }

    #[must_use]
    pub fn is_ignored(self) -> bool {
        matches!(self, Step::Ignored)
    }
}
