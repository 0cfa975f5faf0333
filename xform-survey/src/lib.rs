//! Survey trees for XForm generation.
//!
//! This crate provides the pieces the document assembler is built from:
//! - `SurveyElement` - The capability contract every tree node implements
//! - `Survey`, `Section`, `Question` and `Choice` - Concrete tree nodes
//! - `XPathIndex` - Name to xpath index and `${name}` substitution
//! - `Translations` and `MediaTable` - Text tables aggregated from the tree
//! - `Node` - The markup tree elements contribute to

mod element_path;
pub use element_path::{ElementPath, SEP};

mod text;
pub use text::{MediaValue, MultiLangText};

mod markup;
pub use markup::Node;

mod error;
pub use error::SurveyError;

mod element;
pub use element::{ElementKind, RenderContext, SurveyElement, walk};

mod xpath;
pub use xpath::{TAG_PATTERN, XPathIndex, is_valid_name};

mod translations;
pub use translations::Translations;

mod media;
pub use media::{MediaKind, MediaTable};

mod question;
pub use question::{Choice, Question, QuestionKind};

mod section;
pub use section::Section;

mod survey;
pub use survey::Survey;
