use async_trait::async_trait;
use quiz_core::model::Question;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::file::JsonFileRepository;
use crate::http::HttpRepository;

/// Errors surfaced by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Source of the question set for a game.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Fetch the full question set, in file order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or decoded.
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError>;
}

/// Fixed in-memory question set for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Vec<Question>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(questions),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        Ok(self.questions.as_ref().clone())
    }
}

/// Holds the question source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        let questions: Arc<dyn QuestionRepository> = Arc::new(JsonFileRepository::new(path));
        Self { questions }
    }

    #[must_use]
    pub fn http(url: impl Into<String>) -> Self {
        let questions: Arc<dyn QuestionRepository> = Arc::new(HttpRepository::new(url));
        Self { questions }
    }

    /// Pick a backend from a location string: `http://` and `https://` are
    /// fetched over the network, anything else is read from disk.
    /// Surrounding whitespace is ignored.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();
        if is_remote(location) {
            Self::http(location)
        } else {
            Self::json_file(location)
        }
    }
}

fn is_remote(location: &str) -> bool {
    let lowered = location.to_ascii_lowercase();
    lowered.starts_with("http://") || lowered.starts_with("https://")
}
