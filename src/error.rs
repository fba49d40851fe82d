use std::fmt;
use thiserror::Error;

/// The admission input that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => f.write_str("name"),
            Field::Age => f.write_str("age"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AdmissionError {
    #[error("Validation error: invalid {field}")]
    ValidationError { field: Field },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Notification error: {0}")]
    NotificationError(String),
}

pub type Result<T> = std::result::Result<T, AdmissionError>;
