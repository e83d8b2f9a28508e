/// Where the game currently is.
///
/// `Idle -> Loading -> Presenting -> Answered -> (Presenting | GameOver) -> Idle`,
/// with `Loading -> Idle` when the question set cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Idle,
    Loading,
    Presenting,
    Answered,
    GameOver,
}

impl GamePhase {
    /// The start control is only offered while idle.
    #[must_use]
    pub fn can_start(self) -> bool {
        matches!(self, GamePhase::Idle)
    }

    #[must_use]
    pub fn accepts_answers(self) -> bool {
        matches!(self, GamePhase::Presenting)
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GamePhase::GameOver)
    }
}
