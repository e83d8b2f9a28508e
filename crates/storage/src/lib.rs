#![forbid(unsafe_code)]

pub mod file;
pub mod http;
pub mod record;
pub mod repository;

pub use repository::{InMemoryRepository, QuestionRepository, Storage, StorageError};
