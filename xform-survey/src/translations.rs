//! Per-language text table built from localized element fields.

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

use crate::{MultiLangText, SurveyElement, SurveyError, walk};

/// Language → translation key → text, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    languages: IndexMap<String, IndexMap<String, String>>,
}

impl Translations {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every localized translatable field reachable from `root`.
    ///
    /// Plain-text fields are not translated and are skipped.
    pub fn build(root: &dyn SurveyElement) -> Result<Self, SurveyError> {
        let mut table = Self::new();
        walk(root, &mut |path, element| {
            for (field, key) in element.translation_keys(path) {
                if let Some(MultiLangText::Localized(texts)) = element.text(field) {
                    for (language, text) in texts {
                        table.insert(language, &key, text)?;
                    }
                }
            }
            Ok::<(), SurveyError>(())
        })?;
        debug!(
            languages = table.languages.len(),
            keys = table.key_count(),
            "built translation table"
        );
        Ok(table)
    }

    /// Add `text` for `(language, key)`.
    ///
    /// Fails if the pair is already present with different text.
    pub fn insert(&mut self, language: &str, key: &str, text: &str) -> Result<(), SurveyError> {
        let texts = self.languages.entry(language.to_string()).or_default();
        match texts.entry(key.to_string()) {
            Entry::Occupied(existing) if existing.get() != text => {
                Err(SurveyError::InconsistentTranslation {
                    key: key.to_string(),
                    language: language.to_string(),
                    existing: existing.get().clone(),
                    conflicting: text.to_string(),
                })
            }
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(slot) => {
                slot.insert(text.to_string());
                Ok(())
            }
        }
    }

    /// The text for `(language, key)`.
    pub fn get(&self, language: &str, key: &str) -> Option<&str> {
        self.languages
            .get(language)
            .and_then(|texts| texts.get(key))
            .map(String::as_str)
    }

    /// Check if any language has text for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.languages.values().any(|texts| texts.contains_key(key))
    }

    /// Languages in first-seen order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Iterate `(language, key → text)` groups.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexMap<String, String>)> {
        self.languages
            .iter()
            .map(|(language, texts)| (language.as_str(), texts))
    }

    /// Total number of `(language, key)` entries.
    pub fn key_count(&self) -> usize {
        self.languages.values().map(IndexMap::len).sum()
    }

    /// Check if the table has no text at all.
    pub fn is_empty(&self) -> bool {
        self.languages.values().all(IndexMap::is_empty)
    }
}
