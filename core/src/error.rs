use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Precondition failed for '{stage}': must generate {missing} first")]
    PreconditionFailed {
        stage: &'static str,
        missing: &'static str,
    },

    #[error("Invalid catalog config at '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GenError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type GenResult<T> = Result<T, GenError>;
