//! Unit tests for journal cleanup

use std::fs;

use kbtidy::journal::{clean_file, clean_journal_content, find_journal_files, parse_date_arg};
use tempfile::TempDir;

use crate::helpers::ymd;

#[test]
fn empty_sections_are_removed() {
    let page = "\
- ## Morning
- ## Work
  - shipped the release
- ## Evening
";
    assert_eq!(
        clean_journal_content(page),
        "- ## Work\n  - shipped the release\n"
    );
}

#[test]
fn plain_markdown_headings_are_sections_too() {
    let page = "## Ideas\n## Reading\n  Deep Work\n";
    assert_eq!(clean_journal_content(page), "## Reading\n  Deep Work\n");
}

#[test]
fn content_outside_sections_is_kept() {
    let page = "title:: Mon\n- loose note\n- ## Empty\n";
    assert_eq!(clean_journal_content(page), "title:: Mon\n- loose note\n");
}

#[test]
fn cleaning_twice_changes_nothing() {
    let page = "- ## A\n- ## B\n  - b\n- c\n";
    let once = clean_journal_content(page);
    assert_eq!(clean_journal_content(&once), once);
}

#[test]
fn clean_file_reports_changes_and_respects_dry_run() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("2025-01-15.md");
    fs::write(&path, "- ## Empty\n- kept\n").unwrap();

    assert!(clean_file(&path, true).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "- ## Empty\n- kept\n");

    assert!(clean_file(&path, false).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "- kept\n");

    assert!(!clean_file(&path, false).unwrap());
}

#[test]
fn lookback_window_bounds_discovery() {
    let temp = TempDir::new().unwrap();
    for name in ["2025-01-01.md", "2025_01_08.md", "journal_2025-01-09.md", "2025-01-10.md"] {
        fs::write(temp.path().join(name), "- note\n").unwrap();
    }

    let found = find_journal_files(temp.path(), ymd(2025, 1, 10), 7, false);
    let dates: Vec<_> = found.iter().map(|(date, _)| *date).collect();
    assert_eq!(dates, vec![ymd(2025, 1, 8), ymd(2025, 1, 9)]);

    let with_today = find_journal_files(temp.path(), ymd(2025, 1, 10), 7, true);
    assert_eq!(with_today.len(), 3);
}

#[test]
fn date_argument_must_be_iso() {
    assert_eq!(parse_date_arg("2025-01-15").unwrap(), ymd(2025, 1, 15));
    assert!(parse_date_arg("15.01.2025").is_err());
    assert!(parse_date_arg("2025-02-30").is_err());
}
