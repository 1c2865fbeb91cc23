//! clean-sources command handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use kbtidy::files::write_atomic;
use kbtidy::sources::{changed_lines, clean_sources, LineChange};
use kbtidy::{current_theme, Theme};

use super::{read_input, write_output};

/// Options for one clean-sources run.
#[derive(Debug, Clone, Default)]
pub struct SourcesArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub in_place: bool,
    pub preview: bool,
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: SourcesArgs) -> Result<()> {
    run(&args)
}

pub fn run(args: &SourcesArgs) -> Result<()> {
    let content = read_input(args.input.as_deref())?;
    let cleaned = clean_sources(&content);
    let theme = current_theme();

    if args.preview {
        eprint!("{}", render_preview(&content, &cleaned, &theme));
        return Ok(());
    }

    match (&args.input, args.in_place) {
        (Some(input), true) => {
            write_atomic(input, &cleaned)
                .with_context(|| format!("failed to write {}", input.display()))?;
            eprintln!(
                "{}",
                theme.success_text(&format!("Cleaned sources in {}", input.display()))
            );
        }
        _ => {
            write_output(args.output.as_deref(), &cleaned)?;
            if let Some(output) = &args.output {
                eprintln!(
                    "{}",
                    theme.success_text(&format!("Cleaned content written to {}", output.display()))
                );
            }
        }
    }
    Ok(())
}

/// Before/after listing of changed lines.
pub fn render_preview(original: &str, cleaned: &str, theme: &Theme) -> String {
    let changes = changed_lines(original, cleaned);
    if changes.is_empty() {
        return format!("{}\n", theme.success_text("No source links found to clean"));
    }

    let rule = "=".repeat(50);
    let mut out = format!("{}\n{}\n", theme.accent_text("Changes preview:"), rule);
    for LineChange {
        line,
        before,
        after,
    } in &changes
    {
        out.push_str(&format!("Line {}:\n", line));
        out.push_str(&theme.error_text(&format!("  - {}", before)));
        out.push('\n');
        out.push_str(&theme.success_text(&format!("  + {}", after)));
        out.push_str("\n\n");
    }
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&theme.primary_text(&format!("Would clean {} lines", changes.len())));
    out.push('\n');
    out
}
