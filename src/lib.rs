//! kbtidy library
//!
//! Batch text transforms for a Logseq knowledge base: Snipd export splitting,
//! journal cleanup, Markdown outlining and citation stripping.

pub mod cli;
pub mod config;
pub mod files;
pub mod journal;
pub mod outline;
pub mod snipd;
pub mod sources;
pub mod text;
pub mod theme;

use std::sync::LazyLock;

pub use config::Config;
pub use snipd::{Episode, EpisodeParser, ShowFile, SplitReport, Splitter};
pub use theme::{current_theme, Theme};

/// Version string shown by `--version`: the crate version, plus the commit in dev builds.
pub static VERSION: LazyLock<String> = LazyLock::new(|| {
    match option_env!("VERGEN_GIT_SHA").filter(|sha| !sha.is_empty() && *sha != "unknown") {
        Some(sha) => format!(
            "{} ({})",
            env!("CARGO_PKG_VERSION"),
            sha.get(..7).unwrap_or(sha)
        ),
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
});
