//! Parse → group → merge pipeline over one export file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::error::SplitError;
use super::group::group_episodes;
use super::parser::{EpisodeParser, SkippedSegment};
use super::writer::{ShowOutcome, ShowWriter};
use crate::files::NamespaceName;

/// A show whose file could not be updated.
#[derive(Debug)]
pub struct ShowFailure {
    pub show: String,
    pub error: SplitError,
}

/// Summary of one split run.
#[derive(Debug, Default)]
pub struct SplitReport {
    pub output_dir: PathBuf,
    pub episodes_parsed: usize,
    pub skipped_segments: Vec<SkippedSegment>,
    pub shows: Vec<ShowOutcome>,
    pub failures: Vec<ShowFailure>,
}

impl SplitReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn total_added(&self) -> usize {
        self.shows.iter().map(|s| s.added).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.shows.iter().map(|s| s.skipped).sum()
    }
}

/// Splits a Snipd export into per-show files.
#[derive(Debug, Clone)]
pub struct Splitter {
    naming: NamespaceName,
}

impl Splitter {
    pub fn new(naming: NamespaceName) -> Self {
        Self { naming }
    }

    /// Split the export at `input` into `output_dir`.
    ///
    /// Returns `Err` only for fatal errors. Shows whose existing file could
    /// not be read back are listed in [`SplitReport::failures`].
    pub fn run(&self, input: &Path, output_dir: &Path) -> Result<SplitReport, SplitError> {
        let text = fs::read_to_string(input).map_err(|source| SplitError::ReadInput {
            path: input.to_path_buf(),
            source,
        })?;
        self.run_text(&text, output_dir)
    }

    /// Split export text that is already in memory.
    pub fn run_text(&self, text: &str, output_dir: &Path) -> Result<SplitReport, SplitError> {
        let mut parser = EpisodeParser::new(text);
        let episodes: Vec<_> = parser.by_ref().collect();
        let mut report = SplitReport {
            output_dir: output_dir.to_path_buf(),
            episodes_parsed: episodes.len(),
            skipped_segments: parser.skipped().to_vec(),
            ..SplitReport::default()
        };
        info!(
            episodes = report.episodes_parsed,
            skipped = report.skipped_segments.len(),
            "parsed export"
        );

        let groups = group_episodes(episodes);
        let mut writer = ShowWriter::new(output_dir, self.naming.clone())?;

        for group in &groups {
            match writer.write_group(group) {
                Ok(outcome) => report.shows.push(outcome),
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    error!(show = %group.display, %err, "show skipped");
                    report.failures.push(ShowFailure {
                        show: group.display.clone(),
                        error: err,
                    });
                }
            }
        }

        Ok(report)
    }
}
