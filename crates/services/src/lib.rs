#![forbid(unsafe_code)]

pub mod error;
pub mod game;

pub use error::{GameError, LoadError};

pub use game::{
    GameController, GameLoopService, GamePhase, Outcome, PresentedQuestion, Resolution,
    ScheduledTransition, StatusMessage, Step, Tone, TransitionKind, TransitionToken,
};
