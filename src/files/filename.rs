//! Filename sanitization and the Logseq namespace naming scheme.
//!
//! Logseq has no folders for pages; a page `Podcasts/My Show` is stored as
//! `Podcasts___My Show.md`. [`NamespaceName`] builds and recognizes such names,
//! [`sanitize`] makes the display part filesystem-safe.

/// Windows reserved device names that cannot be used as filenames.
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Default fallback name when sanitization produces an empty result.
const FALLBACK_NAME: &str = "untitled";

/// Maximum filename length in bytes for most filesystems.
pub const MAX_FILENAME_LENGTH: usize = 255;

/// File extension used for every generated page.
const PAGE_EXTENSION: &str = ".md";

/// Sanitizes a display name for use in a filename.
///
/// Applies the following transformations in order:
/// 1. Invalid filesystem characters → `-`
/// 2. Parentheses removed
/// 3. Control characters dropped, whitespace runs collapsed to one space
/// 4. Leading/trailing dots, spaces, hyphens trimmed
/// 5. Windows reserved names prefixed with `_`
/// 6. Empty results → "untitled" fallback
///
/// Case and non-ASCII letters are preserved so the file keeps the show's
/// display name.
pub fn sanitize(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut last_was_space = false;

    for c in input.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
            continue;
        }
        if c == '(' || c == ')' || c.is_control() {
            continue;
        }
        last_was_space = false;
        if INVALID_CHARS.contains(&c) {
            result.push('-');
        } else {
            result.push(c);
        }
    }

    let trimmed = trim_edges(&result);
    let final_name = handle_reserved_name(&trimmed);

    if final_name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        final_name
    }
}

/// Trims leading and trailing dots, spaces, and hyphens.
fn trim_edges(s: &str) -> String {
    s.trim_matches(|c| c == '.' || c == ' ' || c == '-')
        .to_string()
}

/// Prefixes Windows reserved device names with `_`.
fn handle_reserved_name(name: &str) -> String {
    let base_name = match name.find('.') {
        Some(pos) => &name[..pos],
        None => name,
    };

    let upper = base_name.to_uppercase();
    if WINDOWS_RESERVED.iter().any(|reserved| upper == *reserved) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}

/// Truncates to at most `max_bytes` bytes without splitting a character.
pub(crate) fn truncate_to_bytes(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// A `Prefix<separator>Name.md` naming scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceName {
    prefix: String,
    separator: String,
}

impl NamespaceName {
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Builds the file name for a display name.
    ///
    /// The sanitized name is shortened when the whole file name would exceed
    /// [`MAX_FILENAME_LENGTH`] bytes.
    pub fn file_name(&self, display_name: &str) -> String {
        self.numbered_file_name(display_name, 1)
    }

    /// Builds the `n`th candidate file name for a display name.
    ///
    /// `1` is [`file_name`](Self::file_name); later candidates append ` n`
    /// (`Podcasts___untitled 2.md`) and stay within the same length limit.
    pub fn numbered_file_name(&self, display_name: &str, n: usize) -> String {
        let suffix = if n > 1 { format!(" {n}") } else { String::new() };
        let sanitized = sanitize(display_name);
        let overhead =
            self.prefix.len() + self.separator.len() + suffix.len() + PAGE_EXTENSION.len();
        let budget = MAX_FILENAME_LENGTH.saturating_sub(overhead).max(1);
        let name = trim_edges(truncate_to_bytes(&sanitized, budget));
        format!(
            "{}{}{}{}{}",
            self.prefix, self.separator, name, suffix, PAGE_EXTENSION
        )
    }

    /// Returns the name part of a file name that follows this scheme.
    ///
    /// `Podcasts___My Show.md` → `Some("My Show")`; anything else → `None`.
    pub fn name_part<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        let rest = file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_prefix(self.separator.as_str())?
            .strip_suffix(PAGE_EXTENSION)?;
        if rest.is_empty() {
            None
        } else {
            Some(rest)
        }
    }
}
