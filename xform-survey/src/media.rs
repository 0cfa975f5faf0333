//! Media table built from per-kind element media.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use tracing::debug;

use crate::{MediaValue, SurveyElement, SurveyError, walk};

/// The media kinds a form field can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Audio,
    Video,
    /// Long-form text shown next to the media; the element label by default.
    LongText,
}

impl MediaKind {
    /// The `form` attribute value used in the text table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::LongText => "long",
        }
    }

    /// Format an asset as the value written to the text table.
    ///
    /// Images and videos live under `jr://images/` and `jr://videos/`, audio
    /// under `jr://audio/`; long text is written as-is.
    pub fn reference(self, asset: &str) -> String {
        match self {
            Self::Image | Self::Video => format!("jr://{}s/{asset}", self.as_str()),
            Self::Audio => format!("jr://audio/{asset}"),
            Self::LongText => asset.to_string(),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "audio" => Ok(Self::Audio),
            "video" => Ok(Self::Video),
            "long" | "long-text" => Ok(Self::LongText),
            other => Err(other.to_string()),
        }
    }
}

/// Translation key → media kind → asset or text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaTable {
    entries: IndexMap<String, IndexMap<MediaKind, String>>,
}

impl MediaTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect per-kind media from every element reachable from `root`.
    ///
    /// Each entry also records the element's label under [`MediaKind::LongText`].
    /// A single unsupported kind anywhere fails the whole table.
    pub fn build(root: &dyn SurveyElement) -> Result<Self, SurveyError> {
        let mut table = Self::new();
        walk(root, &mut |path, element| {
            for (field, key) in element.media_keys(path) {
                let Some(MediaValue::ByKind(assets)) = element.media(field) else {
                    continue;
                };
                for (kind, asset) in assets {
                    let kind = kind.parse::<MediaKind>().map_err(|kind| {
                        SurveyError::UnsupportedMedia {
                            kind,
                            key: key.clone(),
                        }
                    })?;
                    let entry = table.entries.entry(key.clone()).or_default();
                    if let Some(label) = element.long_label() {
                        entry.insert(MediaKind::LongText, label.to_string());
                    }
                    entry.insert(kind, asset.clone());
                }
            }
            Ok::<(), SurveyError>(())
        })?;
        debug!(keys = table.len(), "built media table");
        Ok(table)
    }

    /// The media recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&IndexMap<MediaKind, String>> {
        self.entries.get(key)
    }

    /// Check if `key` has media.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate `(key, kind → value)` entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexMap<MediaKind, String>)> {
        self.entries.iter().map(|(key, media)| (key.as_str(), media))
    }

    /// Get the number of keys with media.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no element has media.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_kinds() {
        assert_eq!("image".parse::<MediaKind>(), Ok(MediaKind::Image));
        assert_eq!("audio".parse::<MediaKind>(), Ok(MediaKind::Audio));
        assert_eq!("video".parse::<MediaKind>(), Ok(MediaKind::Video));
        assert_eq!("long".parse::<MediaKind>(), Ok(MediaKind::LongText));
        assert_eq!("long-text".parse::<MediaKind>(), Ok(MediaKind::LongText));
    }

    #[test]
    fn rejects_other_kinds() {
        assert_eq!("hologram".parse::<MediaKind>(), Err("hologram".to_string()));
        assert!("Image".parse::<MediaKind>().is_err());
    }

    #[test]
    fn references_per_kind() {
        assert_eq!(MediaKind::Image.reference("cat.png"), "jr://images/cat.png");
        assert_eq!(MediaKind::Video.reference("cat.mp4"), "jr://videos/cat.mp4");
        assert_eq!(MediaKind::Audio.reference("meow.mp3"), "jr://audio/meow.mp3");
        assert_eq!(MediaKind::LongText.reference("A cat"), "A cat");
    }
}
