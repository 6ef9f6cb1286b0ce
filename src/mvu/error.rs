use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(String),
    #[error("csv error: {0}")]
    Csv(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// True for errors caused by the caller's input rather than the data on disk.
    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
