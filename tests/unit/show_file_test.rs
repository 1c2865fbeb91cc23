//! Unit tests for parsing, merging and rendering show files

use kbtidy::snipd::{ShowFileError, ShowFile};

use crate::helpers::{episode, ymd};

const EXISTING: &str = "\
type:: podcast
show:: My Show
host:: Ann Host
alias:: [[MS]]
episode-count:: 9
last-episode-date:: 2020-01-01

- ## Older
  publish-date:: 2024-12-20

- ## Undated

- ## Newer
  publish-date:: 2025-01-15
";

#[test]
fn header_fields_are_derived_not_trusted() {
    let file = ShowFile::parse(EXISTING).unwrap();
    assert_eq!(file.episode_count(), 3);
    assert_eq!(file.last_episode_date(), Some(ymd(2025, 1, 15)));

    let rendered = file.render();
    assert!(rendered.contains("episode-count:: 3\n"));
    assert!(rendered.contains("last-episode-date:: 2025-01-15\n"));
    assert!(!rendered.contains("2020-01-01"));
}

#[test]
fn episodes_sort_newest_first_with_undated_last() {
    let file = ShowFile::parse(EXISTING).unwrap();
    let titles: Vec<_> = file.episodes.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Newer", "Older", "Undated"]);
}

#[test]
fn unknown_header_properties_survive_a_rewrite() {
    let file = ShowFile::parse(EXISTING).unwrap();
    assert_eq!(
        file.properties,
        vec![("alias".to_string(), "[[MS]]".to_string())]
    );
    assert!(file.render().contains("\nalias:: [[MS]]\n"));
}

#[test]
fn merge_adds_only_unknown_episodes() {
    let mut file = ShowFile::parse(EXISTING).unwrap();
    let added = file.merge(vec![
        episode("My Show", "Middle", Some(ymd(2025, 1, 1))),
        episode("my show", "  newer ", Some(ymd(2025, 1, 15))),
    ]);

    assert_eq!(added, 1);
    assert_eq!(file.episode_count(), 4);
    let titles: Vec<_> = file.episodes.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Newer", "Middle", "Older", "Undated"]);
}

#[test]
fn same_title_on_another_date_is_a_new_episode() {
    let mut file = ShowFile::parse(EXISTING).unwrap();
    let added = file.merge(vec![episode("My Show", "Newer", Some(ymd(2025, 2, 1)))]);
    assert_eq!(added, 1);
}

#[test]
fn rendered_file_parses_back_to_itself() {
    let file = ShowFile::parse(EXISTING).unwrap();
    let rendered = file.render();
    let reparsed = ShowFile::parse(&rendered).unwrap();
    assert_eq!(reparsed, file);
    assert_eq!(reparsed.render(), rendered);
}

#[test]
fn free_text_before_the_first_episode_is_rejected() {
    let err = ShowFile::parse("Some notes I wrote\n\n- ## Episode\n").unwrap_err();
    assert!(matches!(err, ShowFileError::UnexpectedPreamble { line: 1, .. }));
}

#[test]
fn header_without_show_is_rejected() {
    let err = ShowFile::parse("type:: podcast\n\n- ## Episode\n").unwrap_err();
    assert!(matches!(err, ShowFileError::MissingShow));
}
