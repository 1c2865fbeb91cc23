//! Markdown → Logseq outline conversion.
//!
//! Only headings and paragraphs are recognized. Headings become bullets whose
//! depth follows their level; paragraphs nest under the last heading.

use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;

use crate::text::{captures, compile_regex, is_match};

static ATX_HEADING: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile_regex(r"^(#{1,6})\s+(.*?)(?:\s+#+)?\s*$"));
static PROPERTY: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile_regex(r"^[A-Za-z0-9_-][A-Za-z0-9 _-]*::"));

/// How paragraph lines become bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ParagraphMode {
    /// Every non-empty line is its own bullet
    #[default]
    Lines,
    /// Consecutive non-blank lines are joined into one bullet
    Blocks,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: usize, text: String },
    Paragraph(String),
}

#[derive(Debug, Clone, Copy)]
pub struct OutlineOptions {
    pub paragraph_mode: ParagraphMode,
    /// Spaces per outline level
    pub indent_width: usize,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            paragraph_mode: ParagraphMode::Lines,
            indent_width: 2,
        }
    }
}

fn atx_heading(line: &str) -> Option<(usize, String)> {
    let caps = captures(ATX_HEADING.as_ref(), line)?;
    Some((caps[1].len(), caps[2].trim().to_string()))
}

fn setext_level(underline: &str) -> Option<usize> {
    let trimmed = underline.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.chars().all(|c| c == '=') {
        Some(1)
    } else if trimmed.chars().all(|c| c == '-') {
        Some(2)
    } else {
        None
    }
}

/// Split Markdown into heading and paragraph blocks.
pub fn parse_blocks(markdown: &str, mode: ParagraphMode) -> Vec<Block> {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut blocks = Vec::new();
    let mut pending: Vec<&str> = Vec::new();

    let flush = |pending: &mut Vec<&str>, blocks: &mut Vec<Block>| {
        if !pending.is_empty() {
            let text = pending.join(" ");
            blocks.push(Block::Paragraph(text));
            pending.clear();
        }
    };

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush(&mut pending, &mut blocks);
            i += 1;
            continue;
        }

        if let Some((level, text)) = atx_heading(line) {
            flush(&mut pending, &mut blocks);
            blocks.push(Block::Heading { level, text });
            i += 1;
            continue;
        }

        if let Some(level) = lines.get(i + 1).and_then(|next| setext_level(next)) {
            flush(&mut pending, &mut blocks);
            blocks.push(Block::Heading {
                level,
                text: trimmed.to_string(),
            });
            i += 2;
            continue;
        }

        match mode {
            ParagraphMode::Lines => blocks.push(Block::Paragraph(trimmed.to_string())),
            ParagraphMode::Blocks => pending.push(trimmed),
        }
        i += 1;
    }
    flush(&mut pending, &mut blocks);

    blocks
}

/// Convert Markdown into outline text, newline-terminated when non-empty.
pub fn convert_to_outline(markdown: &str, options: &OutlineOptions) -> String {
    let indent = |depth: usize| " ".repeat(depth * options.indent_width);
    let mut out: Vec<String> = Vec::new();
    let mut heading_level = 0;

    for block in parse_blocks(markdown, options.paragraph_mode) {
        match block {
            Block::Heading { level, text } => {
                out.push(format!("{}- {} {}", indent(level - 1), "#".repeat(level), text));
                heading_level = level;
            }
            Block::Paragraph(text) => {
                let bulleted = text.strip_prefix("- ").map(str::trim_start);
                let candidate = bulleted.unwrap_or(&text);
                if is_match(PROPERTY.as_ref(), candidate) {
                    out.push(format!("{}{}", indent(heading_level), candidate));
                } else if let Some(item) = bulleted {
                    let depth = if heading_level > 0 {
                        heading_level + 1
                    } else {
                        0
                    };
                    out.push(format!("{}- {}", indent(depth), item));
                } else {
                    out.push(format!("{}- {}", indent(heading_level), text));
                }
            }
        }
    }

    if out.is_empty() {
        String::new()
    } else {
        let mut text = out.join("\n");
        text.push('\n');
        text
    }
}
