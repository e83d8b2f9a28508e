use std::collections::VecDeque;

use crate::model::{GameSummary, Question, SummaryError};

/// Mutable state for one playthrough.
///
/// Questions are consumed front-to-back and never revisited. The session is
/// dropped on restart and a fresh one is built from a new load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    remaining: VecDeque<Question>,
    total: usize,
    counter: usize,
    score: usize,
}

impl GameSession {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        let total = questions.len();
        Self {
            remaining: questions.into(),
            total,
            counter: 0,
            score: 0,
        }
    }

    /// Number of questions loaded for this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of questions drawn so far (1-based index of the current one).
    #[must_use]
    pub fn counter(&self) -> usize {
        self.counter
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Take the next question off the front of the queue.
    pub fn next_question(&mut self) -> Option<Question> {
        let question = self.remaining.pop_front()?;
        self.counter += 1;
        Some(question)
    }

    /// Count a correct answer for the question most recently drawn.
    ///
    /// The score never exceeds the number of questions drawn.
    pub fn record_correct(&mut self) {
        if self.score < self.counter {
            self.score += 1;
        }
    }

    /// # Errors
    ///
    /// Returns `SummaryError` if the score is somehow above the total.
    pub fn summary(&self) -> Result<GameSummary, SummaryError> {
        GameSummary::new(self.score, self.total)
    }
}
