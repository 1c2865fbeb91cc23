//! Configuration management for kbtidy

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `[journal].directory` is not set.
pub const JOURNAL_DIR_ENV: &str = "LOGSEQ_JOURNAL_DIR";

impl Config {
    /// Get the config file path (~/.config/kbtidy/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/kbtidy)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Journal directory from config, falling back to `LOGSEQ_JOURNAL_DIR`.
    ///
    /// Returns `None` when neither is set.
    pub fn journal_directory(&self) -> Option<PathBuf> {
        self.journal
            .directory
            .clone()
            .or_else(|| std::env::var(JOURNAL_DIR_ENV).ok())
            .filter(|dir| !dir.trim().is_empty())
            .map(|dir| expand_home(&dir))
    }

    /// Default output directory for Snipd show files (current directory if unset)
    pub fn snipd_output_dir(&self) -> PathBuf {
        self.snipd
            .output_dir
            .as_deref()
            .map(expand_home)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Expand a leading `~/` to the home directory
pub fn expand_home(dir: &str) -> PathBuf {
    if let Some(stripped) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(dir)
}
