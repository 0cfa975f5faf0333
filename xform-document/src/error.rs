use xform_survey::SurveyError;

/// Error type for document generation.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The survey tree could not be turned into a document.
    #[error(transparent)]
    Survey(#[from] SurveyError),

    /// The markup tree could not be written as XML.
    #[error("Failed to serialize document: {0}")]
    Serialize(String),

    /// Reading or writing the document file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The external validator rejected the document.
    #[error("Validation failed: {0}")]
    Validation(#[from] anyhow::Error),
}

impl DocumentError {
    /// Create a validation error from any error type.
    pub fn validation(err: impl Into<anyhow::Error>) -> Self {
        Self::Validation(err.into())
    }

    /// Check if the external validator rejected the document.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The survey error behind this failure, if any.
    pub fn as_survey_error(&self) -> Option<&SurveyError> {
        match self {
            Self::Survey(err) => Some(err),
            _ => None,
        }
    }
}
