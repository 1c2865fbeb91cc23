//! Rendering episodes and show headers into Logseq outline text.
//!
//! Every function here is deterministic: the same input renders to the same
//! bytes, and cleaning already-clean text changes nothing.

use chrono::NaiveDate;

use super::date::format_date;
use super::episode::Episode;
use crate::text::strip_invisible;

const INDENT: &str = "  ";
const BODY_INDENT: &str = "    ";

/// Header block of a show file.
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    pub show: &'a str,
    pub host: Option<&'a str>,
    pub thumbnail: Option<&'a str>,
    /// Extra `key:: value` pairs carried over from an existing file
    pub properties: &'a [(String, String)],
    pub episode_count: usize,
    pub last_episode_date: Option<NaiveDate>,
}

/// Clean single-line text such as titles and show names.
pub fn clean_title(text: &str) -> String {
    strip_invisible(text)
        .replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean a multi-line body.
///
/// Trailing whitespace goes, runs of blank lines become one, and leading or
/// trailing blank lines are dropped.
pub fn clean_block(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    for raw in text.lines() {
        let line = strip_invisible(raw).replace('\u{a0}', " ");
        let line = line.trim_end();
        if line.is_empty() {
            if out.last().is_some_and(|prev| !prev.is_empty()) {
                out.push(String::new());
            }
        } else {
            out.push(line.to_string());
        }
    }
    while out.last().is_some_and(|line| line.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

/// Render the property block, one `key:: value` per line, newline-terminated.
pub fn render_header(header: &Header<'_>) -> String {
    let mut lines = vec![
        "type:: podcast".to_string(),
        format!("show:: {}", clean_title(header.show)),
    ];
    if let Some(host) = header.host.map(clean_title).filter(|h| !h.is_empty()) {
        lines.push(format!("host:: {}", host));
    }
    if let Some(thumbnail) = header.thumbnail.map(str::trim).filter(|t| !t.is_empty()) {
        lines.push(format!("thumbnail:: {}", thumbnail));
    }
    for (key, value) in header.properties {
        lines.push(format!("{}:: {}", key, value.trim()));
    }
    lines.push(format!("episode-count:: {}", header.episode_count));
    if let Some(date) = header.last_episode_date {
        lines.push(format!("last-episode-date:: {}", format_date(date)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render one episode block, without a trailing newline.
pub fn render_episode(episode: &Episode) -> String {
    let mut lines = vec![format!("- ## {}", clean_title(&episode.title))];

    if let Some(link) = episode.link.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        lines.push(format!("{INDENT}episode-link:: [Open in Snipd]({link})"));
    }
    if let Some(date) = episode.publish_date {
        lines.push(format!("{INDENT}publish-date:: {}", format_date(date)));
    }
    if let Some(summary) = &episode.summary {
        push_section(&mut lines, "Summary", summary, false);
    }
    for section in &episode.sections {
        push_section(&mut lines, &clean_title(&section.heading), &section.body, false);
    }
    if let Some(transcript) = &episode.transcript {
        push_section(&mut lines, "Transcript", transcript, true);
    }

    lines.join("\n")
}

/// Render a whole show file: header, blank line, blank-separated episodes.
pub fn render_show(header: &Header<'_>, episodes: &[Episode]) -> String {
    let mut out = render_header(header);
    if episodes.is_empty() {
        return out;
    }
    out.push('\n');
    let blocks: Vec<String> = episodes.iter().map(render_episode).collect();
    out.push_str(&blocks.join("\n\n"));
    out.push('\n');
    out
}

fn push_section(lines: &mut Vec<String>, heading: &str, body: &str, collapsed: bool) {
    lines.push(format!("{INDENT}- ### {heading}"));
    if collapsed {
        lines.push(format!("{BODY_INDENT}collapsed:: true"));
    }
    for line in clean_block(body).lines() {
        if line.is_empty() {
            lines.push(String::new());
        } else {
            lines.push(format!("{BODY_INDENT}{line}"));
        }
    }
}
