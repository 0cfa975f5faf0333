use crate::ElementPath;

/// Error type for survey operations.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// A `${name}` reference names no element, or an element name that is
    /// used more than once.
    #[error("There is no survey element with this name: {name}")]
    UnknownReference { name: String },

    /// Two elements disagree on the text for the same translation key.
    #[error(
        "The labels for translation key '{key}' are inconsistent in {language}: '{existing}' vs '{conflicting}'"
    )]
    InconsistentTranslation {
        key: String,
        language: String,
        existing: String,
        conflicting: String,
    },

    /// A media field uses a kind outside image, audio, video and long-text.
    #[error("Media type: {kind} not supported (at {key})")]
    UnsupportedMedia { kind: String, key: String },

    /// An element name is empty or does not match the tag grammar.
    #[error("Invalid element name '{name}' at {parent}")]
    InvalidName { name: String, parent: ElementPath },

    /// Two children of the same parent share a name.
    #[error("Duplicate element name '{name}' under {parent}")]
    DuplicateSibling { name: String, parent: ElementPath },

    /// A select question has nothing to select.
    #[error("Select question {path} has no choices")]
    EmptyChoices { path: ElementPath },
}

impl SurveyError {
    /// Create an unknown-reference error.
    pub fn unknown_reference(name: impl Into<String>) -> Self {
        Self::UnknownReference { name: name.into() }
    }

    /// Check if this error came from resolving a `${}` reference.
    pub fn is_unknown_reference(&self) -> bool {
        matches!(self, Self::UnknownReference { .. })
    }
}
