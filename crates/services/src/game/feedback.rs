use quiz_core::model::GameSummary;

use crate::error::LoadError;

/// How a question was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    TimedOut,
}

impl Outcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

/// Outcome of the current question plus what the player picked, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: Outcome,
    pub selected: Option<String>,
}

/// Visual weight of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Primary,
    Success,
    Danger,
    Warning,
}

/// The single status/message line shown above the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    tone: Tone,
}

impl StatusMessage {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    #[must_use]
    pub fn welcome() -> Self {
        Self::new("Good luck!", Tone::Info)
    }

    #[must_use]
    pub fn press_start() -> Self {
        Self::new("Press Start button", Tone::Info)
    }

    #[must_use]
    pub fn loading() -> Self {
        Self::new("Loading questions...", Tone::Info)
    }

    #[must_use]
    pub fn load_failed(err: &LoadError) -> Self {
        Self::new(err.user_message(), Tone::Danger)
    }

    #[must_use]
    pub fn question_progress(number: usize, total: usize) -> Self {
        Self::new(format!("Question {number} of {total}"), Tone::Primary)
    }

    #[must_use]
    pub fn resolved(outcome: Outcome, answer: &str) -> Self {
        match outcome {
            Outcome::Correct => {
                Self::new("Congratulations! You answered correctly 💪", Tone::Success)
            }
            Outcome::Incorrect => Self::new(
                format!("Wrong answer 😢 The correct answer was: {answer}"),
                Tone::Danger,
            ),
            Outcome::TimedOut => Self::new(
                format!("Time's up! ⏰ The correct answer was: {answer}"),
                Tone::Danger,
            ),
        }
    }

    #[must_use]
    pub fn game_over(summary: &GameSummary) -> Self {
        Self::new(
            format!(
                "Game Over! You scored {} out of {} questions.",
                summary.score(),
                summary.total()
            ),
            Tone::Warning,
        )
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn tone(&self) -> Tone {
        self.tone
    }
}
