//! External validation of written documents.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

/// A checker that accepts or rejects an XForm file on disk.
///
/// Implementations run after the document has been written. A rejection is
/// surfaced to callers as [`DocumentError::Validation`](crate::DocumentError).
pub trait Validator {
    type Error: Into<anyhow::Error>;

    fn validate(&self, path: &Path) -> Result<(), Self::Error>;
}

/// Runs the ODK Validate jar against a document.
#[derive(Debug, Clone)]
pub struct OdkValidator {
    jar: PathBuf,
    java: PathBuf,
}

/// Error type for OdkValidator.
#[derive(Debug, thiserror::Error)]
pub enum OdkValidatorError {
    #[error("Failed to run {java}: {source}")]
    Spawn {
        java: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ODK Validate rejected {path}:\n{diagnostics}")]
    Rejected { path: String, diagnostics: String },
}

impl OdkValidator {
    /// Validate with the given jar, using `java` from `PATH`.
    pub fn new(jar: impl Into<PathBuf>) -> Self {
        Self {
            jar: jar.into(),
            java: PathBuf::from("java"),
        }
    }

    /// Use a specific Java executable.
    pub fn with_java(mut self, java: impl Into<PathBuf>) -> Self {
        self.java = java.into();
        self
    }

    pub fn jar(&self) -> &Path {
        &self.jar
    }
}

impl Validator for OdkValidator {
    type Error = OdkValidatorError;

    fn validate(&self, path: &Path) -> Result<(), Self::Error> {
        debug!(jar = %self.jar.display(), path = %path.display(), "running ODK Validate");

        let output = Command::new(&self.java)
            .arg("-jar")
            .arg(&self.jar)
            .arg(path)
            .output()
            .map_err(|source| OdkValidatorError::Spawn {
                java: self.java.display().to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(OdkValidatorError::Rejected {
                path: path.display().to_string(),
                diagnostics: format!("{}{}", stdout.trim_end(), stderr.trim_end()),
            });
        }
        if !stderr.trim().is_empty() {
            warn!(path = %path.display(), "{}", stderr.trim_end());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_java_on_path() {
        let validator = OdkValidator::new("ODK_Validate.jar");
        assert_eq!(validator.jar(), Path::new("ODK_Validate.jar"));
        assert_eq!(validator.java, PathBuf::from("java"));
    }

    #[test]
    fn custom_java_executable() {
        let validator = OdkValidator::new("v.jar").with_java("/opt/jdk/bin/java");
        assert_eq!(validator.java, PathBuf::from("/opt/jdk/bin/java"));
    }

    #[test]
    fn missing_executable_is_a_spawn_error() {
        let validator =
            OdkValidator::new("v.jar").with_java("/nonexistent/definitely-not-java");
        let err = validator.validate(Path::new("form.xml")).unwrap_err();
        assert!(matches!(err, OdkValidatorError::Spawn { .. }));
    }
}
