//! Journal cleanup: find dated pages and drop their empty sections.

pub mod clean;
pub mod discover;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use clean::clean_journal_content;
pub use discover::{candidate_names, find_journal_file, find_journal_files, parse_date_arg};

use crate::files::write_atomic;

/// Errors raised while cleaning journal pages.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("journal directory is not set (use --dir, [journal].directory or LOGSEQ_JOURNAL_DIR)")]
    DirectoryNotSet,

    #[error("journal directory {} does not exist", path.display())]
    DirectoryMissing { path: PathBuf },

    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Clean one page. Returns whether its content changed.
///
/// With `dry_run` the page is left as it is.
pub fn clean_file(path: &Path, dry_run: bool) -> Result<bool, JournalError> {
    let content = fs::read_to_string(path).map_err(|source| JournalError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cleaned = clean_journal_content(&content);
    if cleaned == content {
        debug!(path = %path.display(), "journal page already clean");
        return Ok(false);
    }
    if !dry_run {
        write_atomic(path, &cleaned).map_err(|source| JournalError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(true)
}
