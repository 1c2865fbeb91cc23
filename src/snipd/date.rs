//! Publish date parsing.
//!
//! Snipd writes dates as journal links (`[[2025-01-15]]`), but graphs configured
//! with another journal title format produce `[[Jan 15th, 2025]]` and friends.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::parser::strip_link;
use crate::text::{compile_regex, replace_all};

/// Accepted date formats, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%Y_%m_%d", "%d.%m.%Y", "%b %d, %Y", "%B %d, %Y",
];

static ORDINAL_SUFFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile_regex(r"(?i)(\d)(?:st|nd|rd|th)\b"));

/// Parse publish-date text into a calendar date.
///
/// Surrounding `[[...]]` and English ordinal suffixes (`1st`, `22nd`, `3rd`,
/// `4th`) are accepted. Returns `None` for anything else.
pub fn parse_publish_date(text: &str) -> Option<NaiveDate> {
    let trimmed = strip_link(text.trim());
    if trimmed.is_empty() {
        return None;
    }
    let cleaned = strip_ordinal_suffixes(trimmed);

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
}

/// Render a date the way show files store it.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `Jan 1st, 2025` → `Jan 1, 2025`. Only suffixes directly after a digit go.
fn strip_ordinal_suffixes(text: &str) -> Cow<'_, str> {
    replace_all(ORDINAL_SUFFIX.as_ref(), text, "$1")
}
