use std::collections::HashSet;
use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset, Local, TimeZone};

use crate::section::{borrow_children, child_bindings, child_controls};
use crate::{
    ElementKind, ElementPath, Node, RenderContext, SurveyElement, SurveyError, is_valid_name,
    walk,
};

/// The root of a survey tree.
///
/// A survey is a section with an identity: a display title and a form id
/// string. Everything derived from the tree (xpath index, text tables) is
/// rebuilt by the document assembler on each render and never stored here.
#[derive(Debug)]
pub struct Survey {
    name: String,

    /// Display name written to the document title; defaults to `name`.
    title: Option<String>,

    children: Vec<Box<dyn SurveyElement>>,

    /// Form identifier, computed on first use unless set explicitly.
    id_string: OnceLock<String>,

    /// Construction time, only used to derive the default id string.
    created_at: DateTime<FixedOffset>,
}

impl Survey {
    /// Create an empty survey stamped with the current local time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            children: Vec::new(),
            id_string: OnceLock::new(),
            created_at: Local::now().fixed_offset(),
        }
    }

    /// Override the construction timestamp.
    pub fn with_created_at<Tz: TimeZone>(mut self, created_at: DateTime<Tz>) -> Self {
        self.created_at = created_at.fixed_offset();
        self
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the form id string.
    pub fn with_id_string(mut self, id_string: impl Into<String>) -> Self {
        self.set_id_string(id_string);
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: impl SurveyElement + 'static) -> Self {
        self.push(child);
        self
    }

    /// Append a child element in place.
    pub fn push(&mut self, child: impl SurveyElement + 'static) {
        self.children.push(Box::new(child));
    }

    /// Get the display title.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Get the construction timestamp.
    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }

    /// The construction date as `YYYY_MM_DD`.
    pub fn date_stamp(&self) -> String {
        self.created_at.format("%Y_%m_%d").to_string()
    }

    /// The form id string: the explicit one, or `<name>_<YYYY_MM_DD>`.
    ///
    /// Once computed it does not change until [`Survey::set_id_string`] or
    /// [`Survey::reset_id_string`] is called.
    pub fn id_string(&self) -> &str {
        self.id_string
            .get_or_init(|| format!("{}_{}", self.name, self.date_stamp()))
    }

    /// Replace the form id string.
    pub fn set_id_string(&mut self, id_string: impl Into<String>) {
        self.id_string = OnceLock::from(id_string.into());
    }

    /// Forget the id string so it is derived again on next use.
    pub fn reset_id_string(&mut self) {
        self.id_string = OnceLock::new();
    }

    /// Check if the survey has any children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Get the number of top-level children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Structural checks run before a document is assembled.
    ///
    /// Question and section names must match the tag grammar, sibling names
    /// must be unique, and each element's own checks must pass. Names repeated
    /// in different branches are allowed here; they only fail when referenced.
    pub fn validate(&self) -> Result<(), SurveyError> {
        walk(self, &mut |path, element| {
            let name = element.name();
            if name.is_empty() || (element.kind().is_queryable() && !is_valid_name(name)) {
                return Err(SurveyError::InvalidName {
                    name: element.name().to_string(),
                    parent: path.parent(),
                });
            }
            element.validate(path)?;

            let mut seen = HashSet::new();
            for child in element.children() {
                if !seen.insert(child.name()) {
                    return Err(SurveyError::DuplicateSibling {
                        name: child.name().to_string(),
                        parent: path.clone(),
                    });
                }
            }
            Ok(())
        })
    }
}

impl SurveyElement for Survey {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Survey
    }

    fn children(&self) -> Vec<&dyn SurveyElement> {
        borrow_children(&self.children)
    }

    fn instance(&self) -> Node {
        Node::element(&self.name)
            .attr("id", self.id_string())
            .children(self.children.iter().map(|child| child.instance()))
    }

    fn bindings(
        &self,
        path: &ElementPath,
        ctx: &RenderContext<'_>,
    ) -> Result<Vec<Node>, SurveyError> {
        child_bindings(&self.children, path, ctx)
    }

    fn control(
        &self,
        path: &ElementPath,
        ctx: &RenderContext<'_>,
    ) -> Result<Vec<Node>, SurveyError> {
        child_controls(&self.children, path, ctx)
    }
}
