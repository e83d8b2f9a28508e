//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SummaryError;
use storage::repository::StorageError;

use crate::game::GamePhase;

/// Errors emitted while loading the question set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LoadError {
    /// Text shown to the player whatever went wrong underneath.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        "Failed to load the page. Please try again later! 😫"
    }
}

/// Errors emitted by `GameController` for requests that make no sense in the
/// current state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameError {
    #[error("cannot {action} while {phase:?}")]
    InvalidPhase {
        action: &'static str,
        phase: GamePhase,
    },
    #[error("{0:?} is not an option for the current question")]
    UnknownOption(String),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
