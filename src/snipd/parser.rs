//! Lazy episode parser for Snipd exports and show files.
//!
//! A segment starts at a column-0 `- ##` line and runs until the next one.
//! Inside a segment:
//!
//! ```text
//! - ## [[Episode title]]            <- title
//!   episode-link:: [Open in Snipd](https://share.snipd.com/...)
//!   show:: [[Show]]                 <- metadata properties
//!   ![Image](https://...){:height 100}
//! - ### Summary                     <- sections at the shallowest heading indent
//!   ...
//! - #### **📚 Transcript**
//!   collapsed:: true
//!   ...
//! ```

use std::iter::{Enumerate, Peekable};
use std::str::Lines;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use super::date::parse_publish_date;
use super::episode::{Episode, Section};
use super::error::SegmentError;
use super::format::{clean_block, clean_title};
use crate::text::{captures, compile_regex, dedent_by, indent_of};

/// Heading used when a section heading cleans down to nothing.
const UNTITLED_SECTION: &str = "Notes";

static HEADING: LazyLock<Option<Regex>> = LazyLock::new(|| compile_regex(r"^(\s*)- (#{1,6}) (.+)$"));
static PROPERTY: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile_regex(r"^([A-Za-z0-9_-]+)::(?:\s+(.*))?$"));
static THUMBNAIL: LazyLock<Option<Regex>> = LazyLock::new(|| compile_regex(r"^!\[Image\]\(([^)]+)\)"));
static MARKDOWN_LINK: LazyLock<Option<Regex>> = LazyLock::new(|| compile_regex(r"^\[[^\]]*\]\(([^)]+)\)$"));

/// A segment that did not become an episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSegment {
    /// 1-based line of the segment's `- ##` heading
    pub line: usize,
    pub reason: SegmentError,
}

/// Iterator over the episodes of an export or show file.
///
/// Segments that cannot become an episode are skipped with a warning and
/// collected in [`EpisodeParser::skipped`].
pub struct EpisodeParser<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
    default_show: Option<String>,
    strict: bool,
    skipped: Vec<SkippedSegment>,
}

impl<'a> EpisodeParser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate().peekable(),
            default_show: None,
            strict: false,
            skipped: Vec::new(),
        }
    }

    /// Parser for show files, whose episode blocks omit `show::`.
    pub fn with_default_show(text: &'a str, show: &str) -> Self {
        Self {
            default_show: Some(show.to_string()),
            ..Self::new(text)
        }
    }

    /// Treat content outside any section as a malformed segment.
    ///
    /// Show files are rewritten from what was parsed, so anything the parser
    /// cannot place would be lost.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Segments skipped so far.
    pub fn skipped(&self) -> &[SkippedSegment] {
        &self.skipped
    }

    /// Pull the next segment: its starting line number and its lines.
    fn next_segment(&mut self) -> Option<(usize, Vec<&'a str>)> {
        let (start, first) = loop {
            let (idx, line) = self.lines.next()?;
            if is_boundary(line) {
                break (idx + 1, line);
            }
        };

        let mut lines = vec![first];
        while let Some((_, line)) = self.lines.peek() {
            if is_boundary(line) {
                break;
            }
            lines.push(line);
            self.lines.next();
        }
        Some((start, lines))
    }

    fn parse_segment(&self, start: usize, lines: &[&str]) -> Result<Episode, SegmentError> {
        let title = clean_title(strip_link(lines[0][4..].trim()));
        if title.is_empty() {
            return Err(SegmentError::MissingTitle);
        }

        let body = &lines[1..];
        let section_indent = body
            .iter()
            .filter_map(|line| captures(HEADING.as_ref(), line))
            .map(|caps| indent_of(&caps[1]))
            .min();
        let first_section = body
            .iter()
            .position(|line| is_section_heading(line, section_indent))
            .unwrap_or(body.len());

        let mut episode = Episode {
            title,
            ..Episode::default()
        };

        for (offset, line) in body[..first_section].iter().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || is_comment(trimmed) {
                continue;
            }
            let line_no = start + 1 + offset;
            if !apply_metadata(&mut episode, trimmed, line_no) {
                if self.strict {
                    return Err(SegmentError::StrayContent { line: line_no });
                }
                debug!(line = line_no, content = trimmed, "dropping content outside any section");
            }
        }

        if let Some(indent) = section_indent {
            let sections = &body[first_section..];
            let mut cursor = 0;
            while cursor < sections.len() {
                let heading_line = sections[cursor];
                let end = sections[cursor + 1..]
                    .iter()
                    .position(|line| is_section_heading(line, Some(indent)))
                    .map_or(sections.len(), |pos| cursor + 1 + pos);
                let heading = captures(HEADING.as_ref(), heading_line)
                    .map(|caps| caps[3].trim().to_string())
                    .unwrap_or_default();
                let text = section_body(&sections[cursor + 1..end], indent + 2);
                add_section(&mut episode, heading, text);
                cursor = end;
            }
        }

        if episode.show.is_empty() {
            match &self.default_show {
                Some(show) => episode.show = show.clone(),
                None => {
                    return Err(SegmentError::MissingShow {
                        title: episode.title,
                    })
                }
            }
        }

        Ok(episode)
    }
}

impl Iterator for EpisodeParser<'_> {
    type Item = Episode;

    fn next(&mut self) -> Option<Episode> {
        loop {
            let (start, lines) = self.next_segment()?;
            match self.parse_segment(start, &lines) {
                Ok(episode) => return Some(episode),
                Err(reason) => {
                    warn!(line = start, %reason, "skipping episode segment");
                    self.skipped.push(SkippedSegment {
                        line: start,
                        reason,
                    });
                }
            }
        }
    }
}

/// Column-0 `- ##` followed by whitespace or end of line.
pub(crate) fn is_boundary(line: &str) -> bool {
    match line.strip_prefix("- ##") {
        Some(rest) => rest.chars().next().map_or(true, char::is_whitespace),
        None => false,
    }
}

fn is_section_heading(line: &str, indent: Option<usize>) -> bool {
    match (indent, captures(HEADING.as_ref(), line)) {
        (Some(indent), Some(caps)) => indent_of(&caps[1]) == indent,
        _ => false,
    }
}

fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with("<!--") && trimmed.ends_with("-->")
}

/// `[[Page]]` → `Page`. Text holding several links is left alone.
pub(crate) fn strip_link(text: &str) -> &str {
    match text.strip_prefix("[[").and_then(|rest| rest.strip_suffix("]]")) {
        Some(inner) if !inner.contains("[[") && !inner.contains("]]") => inner.trim(),
        _ => text,
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Record a metadata line on the episode. Returns false if it is not metadata.
fn apply_metadata(episode: &mut Episode, trimmed: &str, line: usize) -> bool {
    if let Some(caps) = captures(THUMBNAIL.as_ref(), trimmed) {
        if episode.thumbnail.is_none() {
            episode.thumbnail = optional(&caps[1]);
        }
        return true;
    }

    let Some(caps) = captures(PROPERTY.as_ref(), trimmed) else {
        return false;
    };
    let key = caps[1].to_ascii_lowercase();
    let value = caps.get(2).map_or("", |m| m.as_str()).trim();

    match key.as_str() {
        "show" if episode.show.is_empty() => episode.show = clean_title(strip_link(value)),
        "host" if episode.host.is_none() => {
            episode.host = optional(&clean_title(strip_link(value)));
        }
        "episode-link" if episode.link.is_none() => {
            let url = captures(MARKDOWN_LINK.as_ref(), value)
                .map_or(value, |caps| caps.get(1).map_or(value, |m| m.as_str()));
            episode.link = optional(url);
        }
        "publish-date" if episode.publish_date.is_none() => {
            episode.publish_date = parse_publish_date(value);
            if episode.publish_date.is_none() && !value.is_empty() {
                warn!(line, value, title = %episode.title, "unparseable publish date");
            }
        }
        "thumbnail" if episode.thumbnail.is_none() => episode.thumbnail = optional(value),
        "show" | "host" | "episode-link" | "publish-date" | "thumbnail" | "collapsed" => {}
        _ => debug!(line, key = key.as_str(), "ignoring unknown episode property"),
    }
    true
}

/// Dedent a section's lines, drop `collapsed:: true` and comment lines, clean.
fn section_body(lines: &[&str], width: usize) -> String {
    let kept: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            trimmed != "collapsed:: true" && !is_comment(trimmed)
        })
        .map(|line| dedent_by(line, width))
        .collect();
    clean_block(&kept.join("\n"))
}

/// Plain heading text for matching: without emphasis, emoji and spacing.
fn heading_label(heading: &str) -> String {
    heading
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn add_section(episode: &mut Episode, heading: String, body: String) {
    let label = heading_label(&heading);
    if label == "show notes" {
        return;
    }
    if label == "summary" {
        append_block(&mut episode.summary, body);
    } else if label.contains("transcript") {
        append_block(&mut episode.transcript, body);
    } else {
        let heading = match clean_title(&heading) {
            cleaned if cleaned.is_empty() => UNTITLED_SECTION.to_string(),
            cleaned => cleaned,
        };
        episode.sections.push(Section { heading, body });
    }
}

fn append_block(slot: &mut Option<String>, body: String) {
    if body.is_empty() {
        return;
    }
    match slot {
        Some(existing) => {
            existing.push_str("\n\n");
            existing.push_str(&body);
        }
        None => *slot = Some(body),
    }
}
