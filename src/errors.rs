use thiserror::Error;

/// Errors surfaced by document loading and the emit operations.
///
/// Field access itself never produces one of these: a provider that is
/// missing, a field that is absent, or a value that is blank all degrade to
/// the empty default value instead.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The fields document is not valid JSON.
    #[error("invalid fields document: {0}")]
    Document(#[from] serde_json::Error),

    /// The fields document parses but has the wrong shape, or the runner was
    /// invoked inconsistently.
    #[error("{0}")]
    Invalid(String),

    /// The output stream rejected an emitted fragment.
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
}

// Type alias for results that use `FieldError` as the error type
pub type Result<T> = std::result::Result<T, FieldError>;
