//! Error types for the import pipeline.

/// Errors raised while reading, classifying, aggregating or persisting samples.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Persistence failed: {0}")]
    Persistence(String),

    #[error("Invalid value '{value}' for column {table}.{column}")]
    InvalidValue {
        table: String,
        column: String,
        value: String,
    },

    #[error("Unknown metric family: {0}")]
    UnknownFamily(String),

    #[error("Report generation failed: {0}")]
    Report(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ImportError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        ImportError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

impl From<sqlx::Error> for ImportError {
    fn from(e: sqlx::Error) -> Self {
        ImportError::Persistence(e.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        let line = e
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or_default();
        ImportError::malformed(line, e.to_string())
    }
}
