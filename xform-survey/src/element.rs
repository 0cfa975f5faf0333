use std::fmt;

use indexmap::IndexMap;

use crate::{
    ElementPath, MediaTable, MediaValue, MultiLangText, Node, SurveyError, Translations,
    XPathIndex,
};

/// What role an element plays in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// The root of the tree.
    Survey,
    /// A group of questions.
    Section,
    /// A single question.
    Question,
    /// An option of a multiple-choice question.
    Choice,
}

impl ElementKind {
    /// Questions and sections (the survey root included) can be referenced with `${name}`.
    pub fn is_queryable(self) -> bool {
        matches!(self, Self::Survey | Self::Section | Self::Question)
    }

    /// Check if this kind owns an instance subtree of other elements.
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Survey | Self::Section)
    }
}

/// The capability contract every node of a survey tree implements.
///
/// The document assembler and the table builders only talk to elements
/// through this trait. Paths are handed down by the caller during a root-down
/// walk, so an element never needs to know its parent.
pub trait SurveyElement: fmt::Debug + Send + Sync {
    /// The element name, unique among its siblings.
    fn name(&self) -> &str;

    /// The element's role in the tree.
    fn kind(&self) -> ElementKind;

    /// Ordered children. Empty for leaves.
    fn children(&self) -> Vec<&dyn SurveyElement> {
        Vec::new()
    }

    /// Translatable fields of this element, mapped to their translation keys.
    fn translation_keys(&self, _path: &ElementPath) -> IndexMap<&'static str, String> {
        IndexMap::new()
    }

    /// Media-bearing fields of this element, mapped to their translation keys.
    fn media_keys(&self, _path: &ElementPath) -> IndexMap<&'static str, String> {
        IndexMap::new()
    }

    /// The text stored in a field, if any.
    fn text(&self, _field: &str) -> Option<&MultiLangText> {
        None
    }

    /// The media stored in a field, if any.
    fn media(&self, _field: &str) -> Option<&MediaValue> {
        None
    }

    /// Long-form label recorded next to this element's media assets.
    fn long_label(&self) -> Option<&str> {
        self.text("label").and_then(MultiLangText::default_text)
    }

    /// Element-local structural checks.
    fn validate(&self, _path: &ElementPath) -> Result<(), SurveyError> {
        Ok(())
    }

    /// The node this element contributes to the default-value instance.
    fn instance(&self) -> Node {
        Node::element(self.name())
    }

    /// `bind` nodes for this element and its descendants.
    fn bindings(
        &self,
        _path: &ElementPath,
        _ctx: &RenderContext<'_>,
    ) -> Result<Vec<Node>, SurveyError> {
        Ok(Vec::new())
    }

    /// Body controls for this element and its descendants.
    fn control(
        &self,
        _path: &ElementPath,
        _ctx: &RenderContext<'_>,
    ) -> Result<Vec<Node>, SurveyError> {
        Ok(Vec::new())
    }
}

/// Pre-order, depth-first traversal of `root` and all its descendants.
///
/// The callback sees each element with its absolute path, in document
/// order, the root first. The first error stops the walk.
pub fn walk<'a, E, F>(root: &'a dyn SurveyElement, f: &mut F) -> Result<(), E>
where
    F: FnMut(&ElementPath, &'a dyn SurveyElement) -> Result<(), E>,
{
    walk_from(&ElementPath::root(root.name()), root, f)
}

fn walk_from<'a, E, F>(
    path: &ElementPath,
    element: &'a dyn SurveyElement,
    f: &mut F,
) -> Result<(), E>
where
    F: FnMut(&ElementPath, &'a dyn SurveyElement) -> Result<(), E>,
{
    f(path, element)?;
    for child in element.children() {
        walk_from(&path.child(child.name()), child, f)?;
    }
    Ok(())
}

/// Derived tables the elements consult while emitting markup.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub xpaths: &'a XPathIndex,
    pub translations: &'a Translations,
    pub media: &'a MediaTable,
}

impl RenderContext<'_> {
    /// Replace `${name}` references in `text` with absolute xpaths.
    pub fn resolve(&self, text: &str) -> Result<String, SurveyError> {
        self.xpaths.resolve_text(text)
    }

    /// Check if `key` will be present in the emitted `itext` block.
    ///
    /// Only one text table is ever written: translations when there are any,
    /// otherwise the media table.
    pub fn in_itext(&self, key: &str) -> bool {
        if self.translations.is_empty() {
            self.media.contains_key(key)
        } else {
            self.translations.contains_key(key)
        }
    }

    /// Emit a `label`/`hint` style node: an itext reference when the text is
    /// in the text table, otherwise the resolved text inline.
    pub fn text_node(
        &self,
        tag: &str,
        key: &str,
        text: &MultiLangText,
    ) -> Result<Node, SurveyError> {
        if self.in_itext(key) {
            return Ok(Node::element(tag).attr("ref", format!("jr:itext('{key}')")));
        }
        let inline = self.resolve(text.default_text().unwrap_or_default())?;
        Ok(Node::element(tag).with_text(inline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queryable_kinds() {
        assert!(ElementKind::Survey.is_queryable());
        assert!(ElementKind::Section.is_queryable());
        assert!(ElementKind::Question.is_queryable());
        assert!(!ElementKind::Choice.is_queryable());
    }

    #[test]
    fn composite_kinds() {
        assert!(ElementKind::Survey.is_composite());
        assert!(ElementKind::Section.is_composite());
        assert!(!ElementKind::Question.is_composite());
    }
}
