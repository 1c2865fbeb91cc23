//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub snipd: SnipdConfig,
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub outline: OutlineConfig,
}

impl Config {
    /// Validate field ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        self.snipd.validate()?;
        self.journal.validate()?;
        self.outline.validate()
    }
}

/// Snipd export splitter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnipdConfig {
    /// Namespace prefix for show files (`Podcasts` in `Podcasts___Show.md`)
    #[serde(default = "default_namespace_prefix")]
    pub namespace_prefix: String,
    /// Separator between prefix and show name (Logseq uses `___` for `/`)
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Output directory used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

pub fn default_namespace_prefix() -> String {
    "Podcasts".to_string()
}

pub fn default_separator() -> String {
    "___".to_string()
}

impl Default for SnipdConfig {
    fn default() -> Self {
        Self {
            namespace_prefix: default_namespace_prefix(),
            separator: default_separator(),
            output_dir: None,
        }
    }
}

impl SnipdConfig {
    fn validate(&self) -> Result<(), String> {
        if self.namespace_prefix.trim().is_empty() {
            return Err("[snipd].namespace_prefix must not be empty".to_string());
        }
        if self.separator.is_empty() {
            return Err("[snipd].separator must not be empty".to_string());
        }
        if self
            .separator
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_whitespace())
        {
            return Err(format!(
                "[snipd].separator contains an unusable character: {:?}",
                self.separator
            ));
        }
        Ok(())
    }
}

/// Journal cleaner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Journal directory; falls back to `LOGSEQ_JOURNAL_DIR` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    /// How many days back from today a full clean looks for journal files
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
}

pub fn default_lookback_days() -> u32 {
    365
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            directory: None,
            lookback_days: default_lookback_days(),
        }
    }
}

impl JournalConfig {
    fn validate(&self) -> Result<(), String> {
        if self.lookback_days == 0 {
            return Err("[journal].lookback_days must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Markdown-to-outline converter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Spaces per outline level
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

pub fn default_indent_width() -> usize {
    2
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
        }
    }
}

impl OutlineConfig {
    fn validate(&self) -> Result<(), String> {
        if !(1..=8).contains(&self.indent_width) {
            return Err(format!(
                "[outline].indent_width must be between 1 and 8 (got {})",
                self.indent_width
            ));
        }
        Ok(())
    }
}
