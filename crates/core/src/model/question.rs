/// A single multiple-choice question.
///
/// Immutable once built. The correct answer is kept apart from the
/// distractors so the option list can always be rebuilt as
/// `distractors + answer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    distractors: Vec<String>,
    answer: String,
}

impl Question {
    /// Build a question from its text, incorrect options and correct answer.
    ///
    /// Distractors equal to the answer are dropped so the answer shows up
    /// exactly once among the options. Nothing else is validated.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        distractors: impl IntoIterator<Item = String>,
        answer: impl Into<String>,
    ) -> Self {
        let answer = answer.into();
        let distractors = distractors
            .into_iter()
            .filter(|option| *option != answer)
            .collect();

        Self {
            text: text.into(),
            distractors,
            answer,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn distractors(&self) -> &[String] {
        &self.distractors
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// All selectable options in source order: distractors first, answer last.
    #[must_use]
    pub fn options(&self) -> Vec<String> {
        let mut options = Vec::with_capacity(self.distractors.len() + 1);
        options.extend(self.distractors.iter().cloned());
        options.push(self.answer.clone());
        options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.distractors.len() + 1
    }

    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }

    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.is_correct(option) || self.distractors.iter().any(|d| d == option)
    }
}
