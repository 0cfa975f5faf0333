//! Writing documents to disk, with optional external validation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;
use xform_survey::Survey;

use crate::{DocumentError, Validator, XformOptions, render_with_options, to_xml};

/// Render and serialize a survey.
pub fn xform_string(survey: &Survey, options: &XformOptions) -> Result<String, DocumentError> {
    let rendered = render_with_options(survey, options)?;
    to_xml(&rendered.document, options)
}

/// The file name used when no path is given: `<idString>.xml`.
pub fn default_file_name(survey: &Survey) -> PathBuf {
    PathBuf::from(format!("{}.xml", survey.id_string()))
}

/// Write the document to `path`, or to `<idString>.xml` in the working directory.
pub fn write_xform(
    survey: &Survey,
    path: Option<&Path>,
    options: &XformOptions,
) -> Result<PathBuf, DocumentError> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_file_name(survey));
    let xml = xform_string(survey, options)?;
    fs::write(&path, xml)?;
    info!(path = %path.display(), "wrote XForm");
    Ok(path)
}

/// Write the document and run `validator` on the written file.
///
/// The file is left in place even when validation fails.
pub fn write_validated<V: Validator>(
    survey: &Survey,
    path: Option<&Path>,
    options: &XformOptions,
    validator: &V,
) -> Result<PathBuf, DocumentError> {
    let path = write_xform(survey, path, options)?;
    validator.validate(&path).map_err(DocumentError::validation)?;
    Ok(path)
}

/// Serialize the document, validating it through a temporary file first.
pub fn to_validated_xml<V: Validator>(
    survey: &Survey,
    options: &XformOptions,
    validator: &V,
) -> Result<String, DocumentError> {
    let xml = xform_string(survey, options)?;
    let dir = tempfile::tempdir()?;
    let mut file = tempfile::Builder::new()
        .prefix("xform-")
        .suffix(".xml")
        .tempfile_in(dir.path())?;
    file.write_all(xml.as_bytes())?;
    file.flush()?;
    validator.validate(file.path()).map_err(DocumentError::validation)?;
    Ok(xml)
}
