mod controller;
mod feedback;
mod phase;
mod presenter;
mod schedule;
mod workflow;

// Public API of the game subsystem.
pub use crate::error::{GameError, LoadError};
pub use controller::GameController;
pub use feedback::{Outcome, Resolution, StatusMessage, Tone};
pub use phase::GamePhase;
pub use presenter::PresentedQuestion;
pub use schedule::{ScheduledTransition, Step, TransitionKind, TransitionToken};
pub use workflow::GameLoopService;
