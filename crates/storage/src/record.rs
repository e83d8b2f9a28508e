use quiz_core::model::Question;
use serde::Deserialize;

use crate::repository::StorageError;

/// Wire shape of one entry in the question file.
///
/// ```json
/// { "question": "Capital of France?", "options": ["Berlin", "Madrid"], "answer": "Paris" }
/// ```
///
/// `options` holds the distractors only; the answer is appended when the
/// question is presented.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn into_question(self) -> Question {
        Question::new(self.question, self.options, self.answer)
    }
}

/// Decode a full question set from raw JSON bytes.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the payload is not a JSON array of
/// question records.
pub fn parse_question_set(bytes: &[u8]) -> Result<Vec<Question>, StorageError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_slice(bytes).map_err(|e| StorageError::Serialization(e.to_string()))?;
    Ok(records
        .into_iter()
        .map(QuestionRecord::into_question)
        .collect())
}
