//! Minimal markup tree produced by the document assembler.

/// A node of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element {
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    /// Create an element with no attributes or children.
    pub fn element(name: impl Into<String>) -> Self {
        Self::Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Add an attribute. No-op on text nodes.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element { attributes, .. } = &mut self {
            attributes.push((key.into(), value.into()));
        }
        self
    }

    /// Append a child node. No-op on text nodes.
    pub fn child(mut self, child: Node) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    /// Append several child nodes.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// Append a text child.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.child(Self::text(text))
    }

    /// The element name, or `None` for text nodes.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Element { name, .. } => Some(name),
            Self::Text(_) => None,
        }
    }

    /// Look up an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        match self {
            Self::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            Self::Text(_) => None,
        }
    }

    /// Direct children (empty for text nodes).
    pub fn child_nodes(&self) -> &[Node] {
        match self {
            Self::Element { children, .. } => children,
            Self::Text(_) => &[],
        }
    }

    /// First direct child element with the given name.
    pub fn find(&self, name: &str) -> Option<&Node> {
        self.child_nodes()
            .iter()
            .find(|child| child.name() == Some(name))
    }

    /// All direct child elements with the given name.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.child_nodes()
            .iter()
            .filter(move |child| child.name() == Some(name))
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Element { children, .. } => children.iter().map(Node::text_content).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_elements() {
        let node = Node::element("text")
            .attr("id", "/f/age:label")
            .child(Node::element("value").with_text("Age"));

        assert_eq!(node.name(), Some("text"));
        assert_eq!(node.attribute("id"), Some("/f/age:label"));
        assert_eq!(node.find("value").map(Node::text_content).as_deref(), Some("Age"));
        assert!(node.find("label").is_none());
    }

    #[test]
    fn text_nodes_ignore_attributes() {
        let node = Node::text("plain").attr("id", "x").child(Node::element("y"));
        assert_eq!(node, Node::Text("plain".to_string()));
    }

    #[test]
    fn find_all_filters_by_name() {
        let node = Node::element("model")
            .child(Node::element("bind"))
            .child(Node::element("instance"))
            .child(Node::element("bind"));
        assert_eq!(node.find_all("bind").count(), 2);
    }
}
