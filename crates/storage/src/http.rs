use async_trait::async_trait;
use quiz_core::model::Question;
use reqwest::Client;

use crate::record::parse_question_set;
use crate::repository::{QuestionRepository, StorageError};

/// Fetches the question set with a single GET request.
#[derive(Clone)]
pub struct HttpRepository {
    client: Client,
    url: String,
}

impl HttpRepository {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl QuestionRepository for HttpRepository {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        log::debug!("fetching question set from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound);
        }
        if !status.is_success() {
            return Err(StorageError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        parse_question_set(&body)
    }
}
