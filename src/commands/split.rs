//! snipd-split command handler

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use kbtidy::files::NamespaceName;
use kbtidy::snipd::{SplitReport, Splitter, WriteStatus};
use kbtidy::{current_theme, Config, Theme};

/// Split an export and print per-show results.
///
/// Fails after printing the report when any show could not be updated.
#[cfg(not(tarpaulin_include))]
pub fn handle(input: &Path, output_dir: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let output_dir = output_dir.unwrap_or_else(|| config.snipd_output_dir());
    let naming = NamespaceName::new(
        config.snipd.namespace_prefix.clone(),
        config.snipd.separator.clone(),
    );

    let report = Splitter::new(naming)
        .run(input, &output_dir)
        .with_context(|| format!("failed to split {}", input.display()))?;

    let theme = current_theme();
    print!("{}", render_report(&report, &theme));

    if report.has_failures() {
        bail!(
            "{} show(s) could not be updated; their files were left untouched",
            report.failures.len()
        );
    }
    Ok(())
}

/// Human-readable summary of a split run.
pub fn render_report(report: &SplitReport, theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str(&theme.accent_text(&format!(
        "Parsed {} episodes into {} shows ({})\n",
        report.episodes_parsed,
        report.shows.len() + report.failures.len(),
        report.output_dir.display()
    )));

    for show in &report.shows {
        let label = match show.status {
            WriteStatus::Created => "created",
            WriteStatus::Updated => "updated",
            WriteStatus::Unchanged => "unchanged",
        };
        let line = format!(
            "  {}: {} added, {} skipped ({})\n",
            show.show, show.added, show.skipped, label
        );
        if show.added > 0 {
            out.push_str(&theme.success_text(&line));
        } else {
            out.push_str(&theme.secondary_text(&line));
        }
    }

    for failure in &report.failures {
        out.push_str(&theme.error_text(&format!(
            "  {}: failed: {}\n",
            failure.show, failure.error
        )));
    }

    if !report.skipped_segments.is_empty() {
        out.push_str(&theme.warning_text(&format!(
            "Skipped {} malformed segment(s)\n",
            report.skipped_segments.len()
        )));
        for segment in &report.skipped_segments {
            out.push_str(&theme.warning_text(&format!(
                "  line {}: {}\n",
                segment.line, segment.reason
            )));
        }
    }

    out.push_str(&theme.primary_text(&format!(
        "Total: {} added, {} skipped\n",
        report.total_added(),
        report.total_skipped()
    )));
    out
}
