use indexmap::IndexMap;

/// Text attached to an element field, either untranslated or keyed by language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiLangText {
    /// A single string, emitted inline and never translated.
    Plain(String),

    /// Language name (e.g. `"English"`) to text, in declaration order.
    Localized(IndexMap<String, String>),
}

impl MultiLangText {
    /// Create a plain text value.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Create a localized text value from `(language, text)` pairs.
    pub fn localized<L, T>(entries: impl IntoIterator<Item = (L, T)>) -> Self
    where
        L: Into<String>,
        T: Into<String>,
    {
        Self::Localized(
            entries
                .into_iter()
                .map(|(lang, text)| (lang.into(), text.into()))
                .collect(),
        )
    }

    /// Check if this value carries per-language text.
    pub fn is_localized(&self) -> bool {
        matches!(self, Self::Localized(_))
    }

    /// The text to use when no language is selected: the plain string, or the
    /// first declared language.
    pub fn default_text(&self) -> Option<&str> {
        match self {
            Self::Plain(text) => Some(text),
            Self::Localized(map) => map.values().next().map(String::as_str),
        }
    }
}

impl From<&str> for MultiLangText {
    fn from(s: &str) -> Self {
        Self::plain(s)
    }
}

impl From<String> for MultiLangText {
    fn from(s: String) -> Self {
        Self::Plain(s)
    }
}

/// Media attached to an element field.
///
/// Kinds are kept as the strings the survey author supplied; they are checked
/// against the supported set when the media table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaValue {
    /// A bare reference without a kind. Not exported to the media table.
    Plain(String),

    /// Media kind (e.g. `"image"`) to asset file name.
    ByKind(IndexMap<String, String>),
}

impl MediaValue {
    /// Create a media value from `(kind, asset)` pairs.
    pub fn by_kind<K, A>(entries: impl IntoIterator<Item = (K, A)>) -> Self
    where
        K: Into<String>,
        A: Into<String>,
    {
        Self::ByKind(
            entries
                .into_iter()
                .map(|(kind, asset)| (kind.into(), asset.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_text_of_plain() {
        let text = MultiLangText::plain("Age?");
        assert_eq!(text.default_text(), Some("Age?"));
        assert!(!text.is_localized());
    }

    #[test]
    fn default_text_of_localized_is_first_language() {
        let text = MultiLangText::localized([("English", "Age?"), ("French", "Âge ?")]);
        assert_eq!(text.default_text(), Some("Age?"));
        assert!(text.is_localized());
    }

    #[test]
    fn empty_localized_has_no_default() {
        let text = MultiLangText::Localized(IndexMap::new());
        assert_eq!(text.default_text(), None);
    }
}
