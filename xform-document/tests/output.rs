//! Integration tests for writing and validating documents.

use example_surveys::{household_census, plain_form, wildlife_sighting};
use xform_document::{
    TestValidator, XformOptions, default_file_name, to_validated_xml, write_validated,
    write_xform, xform_string,
};

#[test]
fn serialized_document_starts_with_declaration_and_root() {
    let xml = xform_string(&plain_form(), &XformOptions::new().with_indent(0)).unwrap();

    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><h:html xmlns="http://www.w3.org/2002/xforms""#));
    assert!(xml.contains(r#"<plain id="plain_2011_03_09"><name/><age/></plain>"#));
    assert!(xml.contains(r#"<bind nodeset="/plain/age" type="int" constraint=". &gt;= 0"/>"#));
    assert!(xml.ends_with("</h:html>"));
}

#[test]
fn default_file_name_uses_id_string() {
    assert_eq!(
        default_file_name(&household_census()).to_str(),
        Some("household_census_2011_03_09.xml")
    );
}

#[test]
fn write_xform_to_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("census.xml");

    let written = write_xform(&household_census(), Some(&path), &XformOptions::new()).unwrap();

    assert_eq!(written, path);
    let xml = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        xml,
        xform_string(&household_census(), &XformOptions::new()).unwrap()
    );
}

#[test]
fn write_validated_passes_the_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wildlife.xml");
    let validator = TestValidator::new();

    write_validated(&wildlife_sighting(), Some(&path), &XformOptions::new(), &validator).unwrap();

    assert_eq!(validator.paths(), vec![path.clone()]);
    assert_eq!(
        validator.documents(),
        vec![std::fs::read_to_string(&path).unwrap()]
    );
}

#[test]
fn rejected_file_is_reported_and_left_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.xml");
    let validator = TestValidator::rejecting("missing bind");

    let err = write_validated(&plain_form(), Some(&path), &XformOptions::new(), &validator)
        .unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("missing bind"));
    assert!(path.exists());
}

#[test]
fn validated_xml_is_checked_through_a_temporary_file() {
    let validator = TestValidator::new();

    let xml = to_validated_xml(&household_census(), &XformOptions::new(), &validator).unwrap();

    assert_eq!(validator.documents(), vec![xml]);
    let path = &validator.paths()[0];
    assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("xml"));
    assert!(!path.exists());
}

#[test]
fn validated_xml_ignores_separators_in_the_id_string() {
    let outside = tempfile::tempdir().unwrap();
    let absolute = outside.path().join("escaped");

    for id in ["forms/v2".to_string(), absolute.display().to_string()] {
        let survey = xform_survey::Survey::new("f")
            .with_id_string(id.as_str())
            .with_child(xform_survey::Question::new(
                "q",
                "Q",
                xform_survey::QuestionKind::Text,
            ));
        let validator = TestValidator::new();

        let xml = to_validated_xml(&survey, &XformOptions::new(), &validator).unwrap();

        assert!(xml.contains(&format!(r#"id="{id}""#)));
        assert_eq!(validator.paths().len(), 1);
        assert!(!validator.paths()[0].exists());
    }
    assert!(!absolute.with_extension("xml").exists());
    assert_eq!(std::fs::read_dir(outside.path()).unwrap().count(), 0);
}

#[test]
fn validated_xml_propagates_rejection() {
    let validator = TestValidator::rejecting("bad form");

    let err = to_validated_xml(&plain_form(), &XformOptions::new(), &validator).unwrap_err();

    assert!(err.is_validation());
}

#[test]
fn invalid_survey_is_not_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xml");
    let survey = xform_survey::Survey::new("f").with_child(xform_survey::Question::new(
        "q",
        "${nowhere}",
        xform_survey::QuestionKind::Text,
    ));

    let err = write_xform(&survey, Some(&path), &XformOptions::new()).unwrap_err();

    assert!(err.as_survey_error().is_some());
    assert!(!path.exists());
}
