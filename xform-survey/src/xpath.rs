//! Name → xpath index and `${name}` substitution.

use std::convert::Infallible;
use std::sync::LazyLock;

use indexmap::IndexMap;
use indexmap::map::Entry;
use regex::Regex;
use tracing::debug;

use crate::{SurveyElement, SurveyError, walk};

/// Grammar of element names, shared by names and `${}` references.
pub const TAG_PATTERN: &str = r"[A-Za-z_][A-Za-z0-9_]*";

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{TAG_PATTERN}$")).expect("invalid tag regex"));

static BRACKETED_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\$\{{({TAG_PATTERN})\}}")).expect("invalid reference regex")
});

/// Check if `name` is a valid element name.
pub fn is_valid_name(name: &str) -> bool {
    TAG.is_match(name)
}

/// Maps every queryable element name to its absolute xpath.
///
/// A name claimed by more than one element maps to `None`. Lookups treat such
/// an entry exactly like an unknown name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XPathIndex {
    entries: IndexMap<String, Option<String>>,
}

impl XPathIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every question and section reachable from `root`, the root included.
    pub fn build(root: &dyn SurveyElement) -> Self {
        let mut index = Self::new();
        let _ = walk(root, &mut |path, element| {
            if element.kind().is_queryable() {
                index.insert(element.name(), path.as_str());
            }
            Ok::<(), Infallible>(())
        });
        debug!(
            names = index.len(),
            ambiguous = index.ambiguous().count(),
            "built xpath index"
        );
        index
    }

    /// Record `name` at `xpath`. A repeated name becomes ambiguous for good.
    pub fn insert(&mut self, name: &str, xpath: &str) {
        match self.entries.entry(name.to_string()) {
            Entry::Occupied(mut slot) => {
                debug!(name, xpath, "duplicate element name, reference becomes ambiguous");
                slot.insert(None);
            }
            Entry::Vacant(slot) => {
                slot.insert(Some(xpath.to_string()));
            }
        }
    }

    /// Raw entry for `name`: `None` if never seen, `Some(None)` if ambiguous.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries.get(name).map(Option::as_deref)
    }

    /// The xpath `name` resolves to.
    ///
    /// Ambiguous names fail the same way as unknown ones.
    pub fn lookup(&self, name: &str) -> Result<&str, SurveyError> {
        self.get(name)
            .flatten()
            .ok_or_else(|| SurveyError::unknown_reference(name))
    }

    /// Names that were claimed by more than one element.
    pub fn ambiguous(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, xpath)| xpath.is_none())
            .map(|(name, _)| name.as_str())
    }

    /// Get the number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every `${name}` in `text` with the xpath of `name`.
    ///
    /// Substitution is a single pass; inserted xpaths are never re-scanned.
    pub fn resolve_text(&self, text: &str) -> Result<String, SurveyError> {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for cap in BRACKETED_TAG.captures_iter(text) {
            let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
                continue;
            };
            out.push_str(&text[last..whole.start()]);
            out.push_str(self.lookup(name.as_str())?);
            last = whole.end();
        }
        out.push_str(&text[last..]);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(entries: &[(&str, &str)]) -> XPathIndex {
        let mut index = XPathIndex::new();
        for (name, xpath) in entries {
            index.insert(name, xpath);
        }
        index
    }

    #[test]
    fn valid_names() {
        assert!(is_valid_name("age"));
        assert!(is_valid_name("_hidden"));
        assert!(is_valid_name("q1_b"));
        assert!(!is_valid_name("1st"));
        assert!(!is_valid_name("first name"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn resolves_single_reference() {
        let index = index(&[("age", "/f/age")]);
        let text = index.resolve_text("You are ${age} years old").unwrap();
        assert_eq!(text, "You are /f/age years old");
    }

    #[test]
    fn resolves_multiple_references() {
        let index = index(&[("a", "/f/a"), ("b", "/f/s/b")]);
        let text = index.resolve_text("${a} + ${b} = ${a}").unwrap();
        assert_eq!(text, "/f/a + /f/s/b = /f/a");
    }

    #[test]
    fn passes_through_text_without_references() {
        let index = XPathIndex::new();
        assert_eq!(index.resolve_text("no refs, $ {x} ${1x}").unwrap(), "no refs, $ {x} ${1x}");
    }

    #[test]
    fn does_not_rescan_substituted_text() {
        let index = index(&[("a", "${b}"), ("b", "/f/b")]);
        assert_eq!(index.resolve_text("${a}").unwrap(), "${b}");
    }

    #[test]
    fn unknown_reference_fails() {
        let index = index(&[("age", "/f/age")]);
        let err = index.resolve_text("${name}").unwrap_err();
        assert!(matches!(err, SurveyError::UnknownReference { ref name } if name == "name"));
    }

    #[test]
    fn duplicate_name_becomes_ambiguous() {
        let index = index(&[("q1", "/f/a/q1"), ("q1", "/f/b/q1"), ("q1", "/f/c/q1")]);
        assert_eq!(index.get("q1"), Some(None));
        assert_eq!(index.ambiguous().collect::<Vec<_>>(), vec!["q1"]);
        let err = index.resolve_text("see ${q1}").unwrap_err();
        assert!(err.is_unknown_reference());
    }
}
