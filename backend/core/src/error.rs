use thiserror::Error;

/// Top-level error type for document analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A required argument was missing or blank.
    #[error("{0} is required and cannot be blank")]
    Validation(String),

    #[error("Unsupported AI provider: {0:?}")]
    UnsupportedProvider(String),

    #[error("Missing OPENAI_API_KEY")]
    MissingApiKey,

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnalyzerError {
    /// True for errors caused by the caller's input rather than the runtime.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
