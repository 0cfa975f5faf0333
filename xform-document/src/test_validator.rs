//! Test validator for exercising the output path without Java.
//!
//! `TestValidator` records every document it is asked to check and can be
//! told to reject them, so the write-then-validate sequence is testable.
//!
//! # Example
//!
//! ```rust,ignore
//! use xform_document::{TestValidator, XformOptions, to_validated_xml};
//!
//! let validator = TestValidator::new();
//! let xml = to_validated_xml(&survey, &XformOptions::new(), &validator).unwrap();
//!
//! assert_eq!(validator.documents(), vec![xml]);
//! ```

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::Validator;

/// A validator that accepts or rejects every document it sees.
#[derive(Debug, Default)]
pub struct TestValidator {
    rejection: Option<String>,
    seen: RefCell<Vec<(PathBuf, String)>>,
}

/// Error type for TestValidator.
#[derive(Debug, thiserror::Error)]
pub enum TestValidatorError {
    #[error("Rejected {path}: {message}")]
    Rejected { path: String, message: String },

    #[error("Could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl TestValidator {
    /// Create a validator that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every document with the given message.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            rejection: Some(message.into()),
            ..Self::default()
        }
    }

    /// Paths passed to `validate`, in call order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.seen.borrow().iter().map(|(path, _)| path.clone()).collect()
    }

    /// File contents read at validation time, in call order.
    pub fn documents(&self) -> Vec<String> {
        self.seen.borrow().iter().map(|(_, xml)| xml.clone()).collect()
    }
}

impl Validator for TestValidator {
    type Error = TestValidatorError;

    fn validate(&self, path: &Path) -> Result<(), Self::Error> {
        let xml = std::fs::read_to_string(path).map_err(|source| TestValidatorError::Read {
            path: path.display().to_string(),
            source,
        })?;
        self.seen.borrow_mut().push((path.to_path_buf(), xml));

        match &self.rejection {
            Some(message) => Err(TestValidatorError::Rejected {
                path: path.display().to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}
