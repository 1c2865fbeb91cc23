//! Writing show groups into namespace files.
//!
//! Target lookup by normalized show name:
//! 1. An existing `<prefix><sep>*.md` file whose name part normalizes to the
//!    name the group would get (so `My Show` and `my show` hit the same file)
//!    and whose `show::` header normalizes to the group key
//! 2. If that file belongs to another show (`???` and `***` both sanitize to
//!    `untitled`), the next numbered name: `untitled 2`, `untitled 3`, ...
//! 3. Otherwise a new file under the first free candidate name

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::SplitError;
use super::group::{normalize_show_name, ShowGroup};
use super::show_file::ShowFile;
use crate::files::{write_atomic, NamespaceName};

/// What happened to one show's file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Created,
    Updated,
    /// The file already held every episode; nothing was written
    Unchanged,
}

/// Result of writing one show group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowOutcome {
    pub show: String,
    pub path: PathBuf,
    pub status: WriteStatus,
    /// Episodes newly written to the file
    pub added: usize,
    /// Duplicates within the export plus episodes already in the file
    pub skipped: usize,
}

/// Candidate file names tried per show before giving up.
const MAX_NAME_CANDIDATES: usize = 100;

/// Writes show groups into one output directory.
pub struct ShowWriter {
    output_dir: PathBuf,
    naming: NamespaceName,
    /// Normalized show name -> existing file
    index: HashMap<String, PathBuf>,
}

impl ShowWriter {
    /// Create the output directory if needed and index its show files.
    pub fn new(output_dir: impl Into<PathBuf>, naming: NamespaceName) -> Result<Self, SplitError> {
        let output_dir = output_dir.into();
        let dir_error = |source| SplitError::OutputDir {
            path: output_dir.clone(),
            source,
        };

        fs::create_dir_all(&output_dir).map_err(dir_error)?;

        let mut index = HashMap::new();
        for entry in fs::read_dir(&output_dir).map_err(dir_error)? {
            let entry = entry.map_err(dir_error)?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            let Some(key) = index_key(&naming, file_name) else {
                continue;
            };
            if !entry.path().is_file() {
                continue;
            }
            // Keep the first file when two names collapse to one key
            index.entry(key).or_insert_with(|| entry.path());
        }
        debug!(dir = %output_dir.display(), files = index.len(), "indexed existing show files");

        Ok(Self {
            output_dir,
            naming,
            index,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Existing file under a show's first candidate name, if any.
    ///
    /// The file may belong to another show whose name sanitizes the same way;
    /// [`write_group`](Self::write_group) checks its `show::` header.
    pub fn existing_path(&self, display: &str) -> Option<&Path> {
        self.lookup(&self.naming.file_name(display))
    }

    fn lookup(&self, file_name: &str) -> Option<&Path> {
        let key = index_key(&self.naming, file_name)?;
        self.index.get(&key).map(PathBuf::as_path)
    }

    /// Merge a group into its show file.
    ///
    /// Errors reading or parsing an existing file leave it untouched and are
    /// returned as non-fatal; see [`SplitError::is_fatal`].
    pub fn write_group(&mut self, group: &ShowGroup) -> Result<ShowOutcome, SplitError> {
        for n in 1..=MAX_NAME_CANDIDATES {
            let file_name = self.naming.numbered_file_name(&group.display, n);
            let Some(path) = self.lookup(&file_name).map(Path::to_path_buf) else {
                let path = self.output_dir.join(&file_name);
                return self.create(group, &file_name, path);
            };

            let (existing_text, file) = read_show_file(&path)?;
            if normalize_show_name(&file.show) == group.key() {
                return self.update(group, path, existing_text, file);
            }
            debug!(
                show = %group.display,
                owner = %file.show,
                path = %path.display(),
                "file name taken by another show"
            );
        }
        Err(SplitError::NoFreeFileName {
            show: group.display.clone(),
            dir: self.output_dir.clone(),
        })
    }

    fn create(
        &mut self,
        group: &ShowGroup,
        file_name: &str,
        path: PathBuf,
    ) -> Result<ShowOutcome, SplitError> {
        let mut file = ShowFile::new(group.display.clone());
        file.adopt_metadata(group.host.as_deref(), group.thumbnail.as_deref());
        let added = file.merge(group.episodes.iter().cloned());

        write_atomic(&path, &file.render()).map_err(|source| SplitError::Write {
            path: path.clone(),
            source,
        })?;
        info!(show = %group.display, path = %path.display(), added, "created show file");

        if let Some(key) = index_key(&self.naming, file_name) {
            self.index.insert(key, path.clone());
        }
        Ok(ShowOutcome {
            show: group.display.clone(),
            path,
            status: WriteStatus::Created,
            added,
            skipped: group.duplicates,
        })
    }

    fn update(
        &mut self,
        group: &ShowGroup,
        path: PathBuf,
        existing_text: String,
        mut file: ShowFile,
    ) -> Result<ShowOutcome, SplitError> {
        let (new, known) = group.partition_against(&file.keys_for(&group.display));
        file.adopt_metadata(group.host.as_deref(), group.thumbnail.as_deref());
        let added = file.merge(new);
        let skipped = group.duplicates + known.len();

        let rendered = file.render();
        let status = if rendered == existing_text {
            debug!(show = %group.display, path = %path.display(), "show file unchanged");
            WriteStatus::Unchanged
        } else {
            write_atomic(&path, &rendered).map_err(|source| SplitError::Write {
                path: path.clone(),
                source,
            })?;
            info!(show = %group.display, path = %path.display(), added, skipped, "updated show file");
            WriteStatus::Updated
        };

        Ok(ShowOutcome {
            show: group.display.clone(),
            path,
            status,
            added,
            skipped,
        })
    }
}

/// Index key of a namespace file name: its normalized name part.
fn index_key(naming: &NamespaceName, file_name: &str) -> Option<String> {
    naming.name_part(file_name).map(normalize_show_name)
}

fn read_show_file(path: &Path) -> Result<(String, ShowFile), SplitError> {
    let text = fs::read_to_string(path).map_err(|source| SplitError::ReadExisting {
        path: path.to_path_buf(),
        source,
    })?;
    let file = ShowFile::parse(&text).map_err(|source| SplitError::ExistingUnparseable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((text, file))
}
