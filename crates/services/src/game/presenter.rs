use quiz_core::model::Question;
use rand::Rng;
use rand::seq::SliceRandom;

/// A question as shown to the player: options in display order plus its
/// 1-based position in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuestion {
    question: Question,
    options: Vec<String>,
    number: usize,
}

impl PresentedQuestion {
    /// Lay out `question` with its options in uniformly random order.
    ///
    /// `number` is 1-based.
    pub fn present<R: Rng + ?Sized>(question: Question, number: usize, rng: &mut R) -> Self {
        let mut options = question.options();
        // Fisher–Yates.
        options.shuffle(rng);
        Self {
            question,
            options,
            number,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.question.text()
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        self.question.answer()
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.question.is_correct(option)
    }
}
