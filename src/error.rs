use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{what} index {index} is out of range (expected < {limit})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        limit: usize,
    },
    #[error("unknown medal: {0:?}")]
    InvalidMedal(String),
    #[error("{0}")]
    Other(String),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
