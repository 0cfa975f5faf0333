//! XForm document generator for survey trees.
//!
//! Renders a [`Survey`](xform_survey::Survey) into an XForm markup tree,
//! serializes it, and optionally hands the written file to an external
//! validator.
//!
//! # Example
//!
//! ```rust,ignore
//! use xform_document::{XformOptions, render, to_xml};
//! use xform_survey::{Question, QuestionKind, Survey};
//!
//! let survey = Survey::new("household")
//!     .with_child(Question::new("size", "How many people live here?", QuestionKind::Integer));
//!
//! let rendered = render(&survey)?;
//! let xml = to_xml(&rendered.document, &XformOptions::new())?;
//! ```

mod error;
pub use error::DocumentError;

mod generator;
pub use generator::{
    DerivedTables, NAMESPACES, Rendered, XformOptions, render, render_with_options,
};

mod writer;
pub use writer::to_xml;

mod validator;
pub use validator::{OdkValidator, OdkValidatorError, Validator};

mod output;
pub use output::{
    default_file_name, to_validated_xml, write_validated, write_xform, xform_string,
};

mod test_validator;
pub use test_validator::{TestValidator, TestValidatorError};
