use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use quiz_core::model::Question;

use crate::record::parse_question_set;
use crate::repository::{QuestionRepository, StorageError};

/// Reads the question set from a JSON file on disk.
#[derive(Clone, Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionRepository for JsonFileRepository {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        log::debug!("reading question file {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound,
            _ => StorageError::Io(e.to_string()),
        })?;
        parse_question_set(&bytes)
    }
}
