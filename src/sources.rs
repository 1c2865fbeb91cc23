//! Citation cleanup for text copied out of Perplexity.
//!
//! Removes `[source](url)` and `[source+2](url)` citation links along with
//! invisible characters, then tidies the spacing they leave behind.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::{compile_regex, replace_all, strip_invisible};

static CITATION_LINK: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile_regex(r"(?i)\[([a-z0-9_-]+(?:\+\d+)?)\]\([^)\n]+\)"));
static SPACE_RUN: LazyLock<Option<Regex>> = LazyLock::new(|| compile_regex(r" {2,}"));
static TRAILING_SPACES: LazyLock<Option<Regex>> = LazyLock::new(|| compile_regex(r"(?m) +$"));

/// Remove citation links and invisible characters.
pub fn clean_sources(text: &str) -> String {
    let without_links = replace_all(CITATION_LINK.as_ref(), text, "");
    let visible = strip_invisible(&without_links);
    let single_spaced = replace_all(SPACE_RUN.as_ref(), &visible, " ");
    replace_all(TRAILING_SPACES.as_ref(), &single_spaced, "").into_owned()
}

/// A line that cleaning changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// 1-based line number
    pub line: usize,
    pub before: String,
    pub after: String,
}

/// Pair original and cleaned lines and keep those that differ.
pub fn changed_lines(original: &str, cleaned: &str) -> Vec<LineChange> {
    original
        .lines()
        .zip(cleaned.lines())
        .enumerate()
        .filter(|(_, (before, after))| before != after)
        .map(|(idx, (before, after))| LineChange {
            line: idx + 1,
            before: before.to_string(),
            after: after.to_string(),
        })
        .collect()
}
