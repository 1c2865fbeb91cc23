//! Episode records and their deduplication identity.

use chrono::NaiveDate;

/// A named body section kept as-is (e.g. `Snips`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading text without the bullet and `#` markers
    pub heading: String,
    /// Body lines, dedented relative to the heading
    pub body: String,
}

/// One podcast episode parsed from an export or from a show file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Episode {
    pub show: String,
    pub title: String,
    pub host: Option<String>,
    pub thumbnail: Option<String>,
    pub publish_date: Option<NaiveDate>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub transcript: Option<String>,
    /// Other sections in document order
    pub sections: Vec<Section>,
}

impl Episode {
    /// Identity used for deduplication.
    pub fn key(&self) -> EpisodeKey {
        EpisodeKey::new(&self.show, &self.title, self.publish_date)
    }
}

/// Deduplication identity: normalized show, normalized title, publish date.
///
/// Two episodes are the same if all three match. See [`normalize_text`] for
/// how much of the text participates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EpisodeKey {
    show: String,
    title: String,
    date: Option<NaiveDate>,
}

impl EpisodeKey {
    pub fn new(show: &str, title: &str, date: Option<NaiveDate>) -> Self {
        Self {
            show: normalize_text(show),
            title: normalize_text(title),
            date,
        }
    }

    /// Same episode identity, re-homed under another show name.
    pub fn with_show(&self, show: &str) -> Self {
        Self {
            show: normalize_text(show),
            title: self.title.clone(),
            date: self.date,
        }
    }
}

/// Normalization shared by show names and titles.
///
/// Trims, collapses every whitespace run to a single space, and lowercases.
/// Punctuation is significant: `Part 1` and `Part 1.` are different titles.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
