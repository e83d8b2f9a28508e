use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("score ({score}) exceeds total questions ({total})")]
    ScoreExceedsTotal { score: usize, total: usize },
}

/// Final tally for a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    score: usize,
    total: usize,
}

impl GameSummary {
    /// # Errors
    ///
    /// Returns `SummaryError::ScoreExceedsTotal` if `score > total`.
    pub fn new(score: usize, total: usize) -> Result<Self, SummaryError> {
        if score > total {
            return Err(SummaryError::ScoreExceedsTotal { score, total });
        }
        Ok(Self { score, total })
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }
}
