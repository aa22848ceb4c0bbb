use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("Unsupported task: {0}")]
    UnsupportedTask(String),

    #[error("Unsupported library: {0}")]
    UnsupportedBackend(String),

    #[error("{0}")]
    MissingInput(String),

    #[error("Empty vocabulary; the documents only contain stop words")]
    EmptyVocabulary,

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Errors caused by the caller's input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoreError::Validation(_)
                | CoreError::UnsupportedTask(_)
                | CoreError::UnsupportedBackend(_)
                | CoreError::MissingInput(_)
                | CoreError::EmptyVocabulary
        )
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Internal(err.to_string())
    }
}
