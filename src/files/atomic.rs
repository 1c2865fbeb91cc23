//! Whole-file replacement via temp file + rename.
//!
//! Readers of the target path see either the old content or the new content,
//! never a truncated mix.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::filename::{truncate_to_bytes, MAX_FILENAME_LENGTH};

const TEMP_PREFIX: &str = ".";
const TEMP_SUFFIX: &str = ".tmp";

/// Get the temp path used while replacing `path`.
///
/// The temp file lives next to the target so the rename stays on one filesystem.
/// Its name is shortened so it never exceeds [`MAX_FILENAME_LENGTH`] bytes,
/// even when the target name already uses the whole limit.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let budget = MAX_FILENAME_LENGTH - TEMP_PREFIX.len() - TEMP_SUFFIX.len();
    let stem = truncate_to_bytes(&file_name, budget);
    path.with_file_name(format!("{TEMP_PREFIX}{stem}{TEMP_SUFFIX}"))
}

/// Replace the contents of `path` with `contents`.
///
/// Uses an atomic temp+rename pattern for crash safety. The temp file is
/// removed again if the rename fails.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let temp_path = temp_path_for(path);

    if let Err(e) = fs::write(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}
