//! Command handlers for the kbtidy CLI.
//!
//! Each submodule handles one subcommand. Dispatch lives in main.rs.

pub mod completions;
pub mod config;
pub mod journal;
pub mod outline;
pub mod sources;
pub mod split;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Read a file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Write to a file, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .context("failed to write stdout")
        }
    }
}
