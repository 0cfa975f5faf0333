use indexmap::IndexMap;

use crate::{
    ElementKind, ElementPath, MultiLangText, Node, RenderContext, SurveyElement, SurveyError,
};

/// A group of questions (and nested groups) answered together.
#[derive(Debug)]
pub struct Section {
    name: String,
    label: Option<MultiLangText>,
    /// XPath relevance condition for the whole group.
    relevant: Option<String>,
    children: Vec<Box<dyn SurveyElement>>,
}

impl Section {
    /// Create an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            relevant: None,
            children: Vec::new(),
        }
    }

    /// Set the group label.
    pub fn with_label(mut self, label: impl Into<MultiLangText>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the relevance condition.
    pub fn with_relevant(mut self, relevant: impl Into<String>) -> Self {
        self.relevant = Some(relevant.into());
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

    /// Get the group label.
    pub fn label(&self) -> Option<&MultiLangText> {
        self.label.as_ref()
    }

    /// Get the number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the section has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl SurveyElement for Section {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Section
    }

    fn children(&self) -> Vec<&dyn SurveyElement> {
        borrow_children(&self.children)
    }

    fn translation_keys(&self, path: &ElementPath) -> IndexMap<&'static str, String> {
        let mut keys = IndexMap::new();
        if self.label.is_some() {
            keys.insert("label", path.field_key("label"));
        }
        keys
    }

    fn text(&self, field: &str) -> Option<&MultiLangText> {
        match field {
            "label" => self.label.as_ref(),
            _ => None,
        }
    }

    fn instance(&self) -> Node {
        Node::element(&self.name).children(self.children.iter().map(|child| child.instance()))
    }

    fn bindings(
        &self,
        path: &ElementPath,
        ctx: &RenderContext<'_>,
    ) -> Result<Vec<Node>, SurveyError> {
        let mut binds = Vec::new();
        if let Some(relevant) = &self.relevant {
            binds.push(
                Node::element("bind")
                    .attr("nodeset", path.as_str())
                    .attr("relevant", ctx.resolve(relevant)?),
            );
        }
        binds.extend(child_bindings(&self.children, path, ctx)?);
        Ok(binds)
    }

    fn control(
        &self,
        path: &ElementPath,
        ctx: &RenderContext<'_>,
    ) -> Result<Vec<Node>, SurveyError> {
        let mut group = Node::element("group").attr("ref", path.as_str());
        if let Some(label) = &self.label {
            group = group.child(ctx.text_node("label", &path.field_key("label"), label)?);
        }
        Ok(vec![group.children(child_controls(&self.children, path, ctx)?)])
    }
}

pub(crate) fn borrow_children(children: &[Box<dyn SurveyElement>]) -> Vec<&dyn SurveyElement> {
    children
        .iter()
        .map(|child| child.as_ref() as &dyn SurveyElement)
        .collect()
}

pub(crate) fn child_bindings(
    children: &[Box<dyn SurveyElement>],
    path: &ElementPath,
    ctx: &RenderContext<'_>,
) -> Result<Vec<Node>, SurveyError> {
    let mut binds = Vec::new();
    for child in children {
        binds.extend(child.bindings(&path.child(child.name()), ctx)?);
    }
    Ok(binds)
}

pub(crate) fn child_controls(
    children: &[Box<dyn SurveyElement>],
    path: &ElementPath,
    ctx: &RenderContext<'_>,
) -> Result<Vec<Node>, SurveyError> {
    let mut controls = Vec::new();
    for child in children {
        controls.extend(child.control(&path.child(child.name()), ctx)?);
    }
    Ok(controls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Question, QuestionKind};

    #[test]
    fn instance_wraps_children() {
        let section = Section::new("household")
            .with_child(Question::new("size", "How many people?", QuestionKind::Integer))
            .with_child(Question::new("town", "Town?", QuestionKind::Text).with_default("Oslo"));

        let instance = section.instance();
        assert_eq!(instance.name(), Some("household"));
        assert!(instance.find("size").is_some());
        assert_eq!(instance.find("town").map(Node::text_content).as_deref(), Some("Oslo"));
    }

    #[test]
    fn label_is_translatable_only_when_set() {
        let path = ElementPath::root("f").child("household");
        assert!(Section::new("household").translation_keys(&path).is_empty());
        let keys = Section::new("household")
            .with_label("Household")
            .translation_keys(&path);
        assert_eq!(keys.get("label").map(String::as_str), Some("/f/household:label"));
    }

    #[test]
    fn children_in_order() {
        let mut section = Section::new("s");
        section.push(Question::new("b", "B", QuestionKind::Text));
        section.push(Question::new("a", "A", QuestionKind::Text));
        let names: Vec<_> = section.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(section.len(), 2);
    }
}
