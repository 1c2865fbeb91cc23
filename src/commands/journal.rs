//! clean-journal command handler

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};

use kbtidy::journal::{self, JournalError};
use kbtidy::{current_theme, Config};

/// Options for one clean-journal run.
#[derive(Debug, Clone)]
pub struct JournalArgs {
    pub date: Option<String>,
    pub all: bool,
    pub dry_run: bool,
    pub dir: Option<PathBuf>,
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: JournalArgs) -> Result<()> {
    let config = Config::load()?;
    let today = Local::now().date_naive();
    run(&args, &config, today)
}

/// Run against an explicit config and date.
pub fn run(args: &JournalArgs, config: &Config, today: NaiveDate) -> Result<()> {
    let dir = resolve_dir(args.dir.as_deref(), config)?;
    let theme = current_theme();

    let files: Vec<PathBuf> = match &args.date {
        Some(date) => {
            let date = journal::parse_date_arg(date)?;
            journal::find_journal_file(&dir, date).into_iter().collect()
        }
        None => journal::find_journal_files(&dir, today, config.journal.lookback_days, args.all)
            .into_iter()
            .map(|(_, path)| path)
            .collect(),
    };

    if files.is_empty() {
        println!("{}", theme.secondary_text("No journal files found to clean."));
        return Ok(());
    }

    println!(
        "{}",
        theme.accent_text(&format!("Found {} journal files to check", files.len()))
    );

    let mut cleaned = 0;
    let mut failed = 0;
    for path in &files {
        let name = display_name(path);
        match journal::clean_file(path, args.dry_run) {
            Ok(true) if args.dry_run => {
                cleaned += 1;
                println!("{}", theme.warning_text(&format!("  would clean {}", name)));
            }
            Ok(true) => {
                cleaned += 1;
                println!("{}", theme.success_text(&format!("  cleaned {}", name)));
            }
            Ok(false) => {}
            Err(err) => {
                failed += 1;
                eprintln!("{}", theme.error_text(&format!("  {}", err)));
            }
        }
    }

    let verb = if args.dry_run { "Would clean" } else { "Cleaned" };
    if cleaned == 0 {
        println!("{}", theme.primary_text("No empty sections found."));
    } else {
        println!(
            "{}",
            theme.primary_text(&format!("{} {} journal files.", verb, cleaned))
        );
    }

    if failed > 0 {
        bail!("{} journal file(s) could not be cleaned", failed);
    }
    Ok(())
}

/// `--dir`, then `[journal].directory`, then `LOGSEQ_JOURNAL_DIR`.
fn resolve_dir(arg: Option<&Path>, config: &Config) -> Result<PathBuf, JournalError> {
    let dir = match arg {
        Some(dir) => dir.to_path_buf(),
        None => config
            .journal_directory()
            .ok_or(JournalError::DirectoryNotSet)?,
    };
    if !dir.is_dir() {
        return Err(JournalError::DirectoryMissing { path: dir });
    }
    Ok(dir)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
