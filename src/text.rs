//! Small text helpers shared by the transforms.

use std::borrow::Cow;

use regex::{Captures, Regex};

/// Compile a hardcoded pattern.
///
/// A pattern that fails to compile is logged and yields `None`; the lookup
/// helpers below then behave as if nothing matched.
pub fn compile_regex(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .map_err(|err| tracing::error!(pattern, %err, "hardcoded regex failed to compile"))
        .ok()
}

/// `regex.captures(text)`, or `None` without a regex.
pub fn captures<'t>(regex: Option<&Regex>, text: &'t str) -> Option<Captures<'t>> {
    regex?.captures(text)
}

/// `regex.is_match(text)`, or `false` without a regex.
pub fn is_match(regex: Option<&Regex>, text: &str) -> bool {
    regex.is_some_and(|regex| regex.is_match(text))
}

/// `regex.replace_all(text, replacement)`, or `text` unchanged without a regex.
pub fn replace_all<'t>(regex: Option<&Regex>, text: &'t str, replacement: &str) -> Cow<'t, str> {
    match regex {
        Some(regex) => regex.replace_all(text, replacement),
        None => Cow::Borrowed(text),
    }
}

/// Zero-width and other invisible characters that exports leave behind.
pub fn is_invisible(c: char) -> bool {
    matches!(c, '\u{200b}'..='\u{200f}' | '\u{2060}' | '\u{feff}')
}

/// Remove invisible characters.
pub fn strip_invisible(text: &str) -> String {
    text.chars().filter(|c| !is_invisible(*c)).collect()
}

/// Number of leading whitespace characters (tabs and spaces count as one).
pub fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Remove up to `width` leading whitespace characters.
pub fn dedent_by(line: &str, width: usize) -> &str {
    let mut start = 0;
    for (removed, (idx, c)) in line.char_indices().enumerate() {
        if removed == width || !c.is_whitespace() {
            start = idx;
            return &line[start..];
        }
        start = idx + c.len_utf8();
    }
    &line[start..]
}
