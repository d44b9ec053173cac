use crate::validation::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid student data: {0}")]
    Validation(#[from] FieldError),

    #[error("Student id already exists: {0}")]
    DuplicateId(String),

    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("Roster lock poisoned by a panicking caller")]
    Poisoned,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
