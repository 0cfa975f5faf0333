use std::fmt;

/// Separator between element names in an xpath.
pub const SEP: char = '/';

/// The absolute location of an element inside a survey, e.g. `"/survey/household/age"`.
///
/// Paths are built while walking the tree from the root down, so an element's
/// parent is always recoverable from its path without a back-pointer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementPath {
    /// Slash-separated path string, always starting with `/` unless empty.
    path: String,
}

impl ElementPath {
    /// Create the path of a survey root element.
    pub fn root(name: &str) -> Self {
        Self::empty().child(name)
    }

    /// Create an empty path (the parent of a survey root).
    pub fn empty() -> Self {
        Self {
            path: String::new(),
        }
    }

    /// Append a child segment to this path, returning a new path.
    pub fn child(&self, name: &str) -> Self {
        Self {
            path: format!("{}{SEP}{name}", self.path),
        }
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Get the segments of this path as an iterator.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split(SEP).filter(|s| !s.is_empty())
    }

    /// Get the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments().count()
    }

    /// Get the last segment, if any.
    pub fn last(&self) -> Option<&str> {
        self.path.rsplit(SEP).next().filter(|s| !s.is_empty())
    }

    /// Get the parent path by removing the last segment.
    pub fn parent(&self) -> Self {
        match self.path.rfind(SEP) {
            Some(idx) => Self {
                path: self.path[..idx].to_string(),
            },
            None => Self::empty(),
        }
    }

    /// The translation key of one of this element's fields, e.g. `"/survey/age:label"`.
    pub fn field_key(&self, field: &str) -> String {
        format!("{}:{field}", self.path)
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root() {
        let path = ElementPath::root("survey");
        assert_eq!(path.as_str(), "/survey");
    }

    #[test]
    fn child() {
        let path = ElementPath::root("survey").child("household").child("age");
        assert_eq!(path.as_str(), "/survey/household/age");
    }

    #[test]
    fn child_with_empty_name_keeps_its_segment() {
        let parent = ElementPath::root("survey").child("q");
        let path = parent.child("");
        assert_eq!(path.as_str(), "/survey/q/");
        assert_ne!(path.field_key("label"), parent.field_key("label"));
    }

    #[test]
    fn segments() {
        let path = ElementPath::root("survey").child("household").child("age");
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments, vec!["survey", "household", "age"]);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn parent() {
        let path = ElementPath::root("survey").child("age");
        assert_eq!(path.parent(), ElementPath::root("survey"));
        assert!(ElementPath::root("survey").parent().is_empty());
        assert_eq!(path.last(), Some("age"));
    }

    #[test]
    fn field_key() {
        let path = ElementPath::root("survey").child("age");
        assert_eq!(path.field_key("label"), "/survey/age:label");
    }

    #[test]
    fn display() {
        let path = ElementPath::root("f").child("age");
        assert_eq!(format!("{}", path), "/f/age");
    }
}
