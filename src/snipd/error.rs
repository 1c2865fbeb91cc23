//! Error types for the Snipd export splitter.
//!
//! - [`SegmentError`] - one export segment could not become an episode (recoverable)
//! - [`ShowFileError`] - an existing show file cannot be parsed back (aborts that show)
//! - [`SplitError`] - everything the splitter reports, with [`SplitError::is_fatal`]

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why an export segment was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// The `- ##` heading carried no usable title.
    #[error("episode heading has no title")]
    MissingTitle,

    /// No `show::` property and no default show to fall back on.
    #[error("episode '{title}' has no show")]
    MissingShow { title: String },

    /// Non-blank content between the metadata and the first section heading.
    #[error("unexpected content outside any section at line {line}")]
    StrayContent { line: usize },
}

/// Why an existing show file could not be read back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShowFileError {
    /// The header block has no `show::` property.
    #[error("header has no show:: property")]
    MissingShow,

    /// Something other than properties or comments before the first episode.
    #[error("unexpected content before the first episode at line {line}: {content}")]
    UnexpectedPreamble { line: usize, content: String },

    /// An episode block did not parse; rewriting would lose it.
    #[error("malformed episode at line {line}: {reason}")]
    MalformedEpisode { line: usize, reason: SegmentError },
}

/// Errors reported while splitting an export.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The export document cannot be read.
    #[error("failed to read input file {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output directory cannot be created or listed.
    #[error("output directory {} is not usable: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An existing show file cannot be read.
    #[error("failed to read existing show file {}: {source}", path.display())]
    ReadExisting {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An existing show file cannot be parsed; it is left untouched.
    #[error("existing show file {} is not parseable: {source}", path.display())]
    ExistingUnparseable {
        path: PathBuf,
        #[source]
        source: ShowFileError,
    },

    /// Every candidate file name already belongs to another show.
    #[error("no free file name for show '{show}' in {}", dir.display())]
    NoFreeFileName { show: String, dir: PathBuf },

    /// A show file cannot be written.
    #[error("failed to write show file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SplitError {
    /// Fatal errors abort the whole run; the others abort only one show.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SplitError::ReadInput { .. } | SplitError::OutputDir { .. } | SplitError::Write { .. }
        )
    }
}
