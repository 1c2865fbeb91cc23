//! Empty-section removal for journal pages.
//!
//! A section is a `## …` or `- ## …` heading plus the lines indented deeper
//! than it. Sections with nothing but blank lines or other headings inside
//! are dropped.

use crate::text::indent_of;

struct OpenSection<'a> {
    heading: &'a str,
    indent: usize,
    content: Vec<&'a str>,
}

impl<'a> OpenSection<'a> {
    fn has_content(&self) -> bool {
        self.content
            .iter()
            .any(|line| !line.trim().is_empty() && !is_heading(line))
    }

    fn flush_into(self, out: &mut Vec<&'a str>) {
        if self.has_content() {
            out.push(self.heading);
            out.extend(self.content);
        }
    }
}

/// `## x`, `### x`, `- ## x` after any leading whitespace.
pub fn is_heading(line: &str) -> bool {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix("- ").unwrap_or(trimmed);
    trimmed.starts_with("##")
}

fn line_indent(line: &str) -> usize {
    if line.trim().is_empty() {
        0
    } else {
        indent_of(line)
    }
}

/// Remove sections that have no non-heading content.
///
/// Lines outside sections are kept as they are, as is the trailing newline.
pub fn clean_journal_content(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut current: Option<OpenSection<'_>> = None;

    for line in text.split('\n') {
        let indent = line_indent(line);

        if is_heading(line) {
            if let Some(section) = current.take() {
                section.flush_into(&mut out);
            }
            current = Some(OpenSection {
                heading: line,
                indent,
                content: Vec::new(),
            });
            continue;
        }

        match current.as_mut() {
            Some(section) if indent > section.indent => section.content.push(line),
            Some(_) => {
                if let Some(section) = current.take() {
                    section.flush_into(&mut out);
                }
                out.push(line);
            }
            None => out.push(line),
        }
    }

    if let Some(section) = current.take() {
        section.flush_into(&mut out);
    }
    out.join("\n")
}
