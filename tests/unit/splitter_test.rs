//! Unit tests for the export splitter end to end

use std::fs;

use kbtidy::snipd::{EpisodeParser, SplitError, WriteStatus};
use tempfile::TempDir;

use crate::helpers::{load_fixture, splitter, ymd};

#[test]
fn parser_skips_malformed_segments_and_keeps_going() {
    let export = load_fixture("snipd_export.md");
    let mut parser = EpisodeParser::new(&export);
    let episodes: Vec<_> = parser.by_ref().collect();

    assert_eq!(episodes.len(), 5);
    assert_eq!(parser.skipped().len(), 1);

    let first = &episodes[0];
    assert_eq!(first.show, "My Show");
    assert_eq!(first.title, "Deep Work Habits");
    assert_eq!(first.host.as_deref(), Some("Ann Host"));
    assert_eq!(first.publish_date, Some(ymd(2025, 1, 15)));
    assert_eq!(
        first.link.as_deref(),
        Some("https://share.snipd.com/episode/1")
    );
    assert_eq!(first.summary.as_deref(), Some("Focus beats multitasking."));
    assert_eq!(first.transcript.as_deref(), Some("Speaker 1: hello"));
    assert_eq!(first.sections.len(), 1);
    assert_eq!(first.sections[0].heading, "Snips");
}

#[test]
fn shows_are_grouped_case_insensitively() {
    let temp = TempDir::new().unwrap();
    let report = splitter()
        .run_text(&load_fixture("snipd_export.md"), temp.path())
        .unwrap();

    assert_eq!(report.episodes_parsed, 5);
    assert_eq!(report.skipped_segments.len(), 1);
    let shows: Vec<_> = report.shows.iter().map(|s| s.show.as_str()).collect();
    assert_eq!(shows, ["My Show", "Other Pod"]);
    assert!(temp.path().join("Podcasts___My Show.md").is_file());
    assert!(!temp.path().join("Podcasts___my show.md").exists());
}

#[test]
fn duplicates_keep_the_first_occurrence() {
    let temp = TempDir::new().unwrap();
    let report = splitter()
        .run_text(&load_fixture("snipd_export.md"), temp.path())
        .unwrap();

    let my_show = &report.shows[0];
    assert_eq!(my_show.added, 3);
    assert_eq!(my_show.skipped, 1);

    let text = fs::read_to_string(&my_show.path).unwrap();
    assert!(text.contains("Speaker 1: hello"));
    assert!(!text.contains("A different transcript."));
    assert_eq!(text.matches("- ## Deep Work Habits").count(), 1);
}

#[test]
fn second_run_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let export = load_fixture("snipd_export.md");

    splitter().run_text(&export, temp.path()).unwrap();
    let first = fs::read_to_string(temp.path().join("Podcasts___My Show.md")).unwrap();

    let report = splitter().run_text(&export, temp.path()).unwrap();
    let second = fs::read_to_string(temp.path().join("Podcasts___My Show.md")).unwrap();

    assert_eq!(first, second);
    assert!(report
        .shows
        .iter()
        .all(|show| show.status == WriteStatus::Unchanged && show.added == 0));
}

#[test]
fn existing_file_with_other_case_is_reused() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("Podcasts___MY SHOW.md"),
        "type:: podcast\nshow:: MY SHOW\nepisode-count:: 0\n",
    )
    .unwrap();

    let report = splitter()
        .run_text(&load_fixture("snipd_export.md"), temp.path())
        .unwrap();

    assert_eq!(report.shows[0].status, WriteStatus::Updated);
    assert_eq!(report.shows[0].added, 3);
    assert!(!temp.path().join("Podcasts___My Show.md").exists());
    let text = fs::read_to_string(temp.path().join("Podcasts___MY SHOW.md")).unwrap();
    assert!(text.starts_with("type:: podcast\nshow:: MY SHOW\nhost:: Ann Host\n"));
}

#[test]
fn unwritable_output_directory_is_fatal() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();

    let err = splitter()
        .run_text(&load_fixture("snipd_export.md"), &blocker.join("out"))
        .unwrap_err();
    assert!(matches!(err, SplitError::OutputDir { .. }));
    assert!(err.is_fatal());
}

fn export_of(entries: &[(&str, &str, &str)]) -> String {
    entries
        .iter()
        .map(|(title, show, date)| {
            format!("- ## [[{title}]]\n  show:: [[{show}]]\n  publish-date:: [[{date}]]\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn long_show_name_does_not_stop_the_run() {
    let temp = TempDir::new().unwrap();
    let long = "A".repeat(240);
    let export = export_of(&[
        ("One", "Short", "2025-01-01"),
        ("Two", &long, "2025-01-02"),
        ("Three", "Zed", "2025-01-03"),
    ]);

    let report = splitter().run_text(&export, temp.path()).unwrap();

    assert!(!report.has_failures());
    assert_eq!(report.shows.len(), 3);
    assert!(report
        .shows
        .iter()
        .all(|show| show.status == WriteStatus::Created && show.path.is_file()));
}

#[test]
fn truncated_show_page_keeps_its_episodes_across_runs() {
    let temp = TempDir::new().unwrap();
    let long = "B".repeat(260);

    let first = export_of(&[("One", &long, "2025-01-01")]);
    splitter().run_text(&first, temp.path()).unwrap();

    let second = export_of(&[("Two", &long, "2025-01-02")]);
    let report = splitter().run_text(&second, temp.path()).unwrap();

    assert_eq!(report.shows[0].status, WriteStatus::Updated);
    assert_eq!(report.shows[0].added, 1);
    let pages: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(pages.len(), 1);
    let text = fs::read_to_string(&report.shows[0].path).unwrap();
    assert!(text.contains("- ## One"));
    assert!(text.contains("- ## Two"));
    assert!(text.contains("episode-count:: 2\n"));
}

#[test]
fn colliding_file_names_keep_shows_apart() {
    let temp = TempDir::new().unwrap();
    let export = export_of(&[
        ("Live Set", "Foo (Live)", "2025-01-01"),
        ("Studio Set", "Foo Live", "2025-01-02"),
    ]);

    let report = splitter().run_text(&export, temp.path()).unwrap();
    assert!(!report.has_failures());

    let live = fs::read_to_string(temp.path().join("Podcasts___Foo Live.md")).unwrap();
    let studio = fs::read_to_string(temp.path().join("Podcasts___Foo Live 2.md")).unwrap();
    assert!(live.contains("show:: Foo (Live)\n"));
    assert!(live.contains("- ## Live Set"));
    assert!(!live.contains("- ## Studio Set"));
    assert!(studio.contains("show:: Foo Live\n"));
    assert!(studio.contains("- ## Studio Set"));

    let again = splitter().run_text(&export, temp.path()).unwrap();
    assert!(again
        .shows
        .iter()
        .all(|show| show.status == WriteStatus::Unchanged));
}
