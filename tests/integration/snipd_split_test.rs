//! Integration tests for the snipd-split command.

use std::fs;

use predicates::prelude::*;

use crate::helpers::Sandbox;

#[test]
fn split_writes_one_page_per_show() {
    let sandbox = Sandbox::new();
    let export = sandbox.fixture("snipd_export.md");
    let out = sandbox.path().join("pages");

    let (stdout, stderr, exit_code) =
        sandbox.run(&["snipd-split", export.to_str().unwrap(), out.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert!(stdout.contains("Parsed 5 episodes into 2 shows"));
    assert!(stdout.contains("  My Show: 3 added, 1 skipped (created)"));
    assert!(stdout.contains("  Other Pod: 1 added, 0 skipped (created)"));
    assert!(stdout.contains("Skipped 1 malformed segment(s)"));
    assert!(stdout.contains("Total: 4 added, 1 skipped"));
    assert!(stderr.contains("skipping episode segment"));

    let page = fs::read_to_string(out.join("Podcasts___My Show.md")).unwrap();
    insta::assert_snapshot!(page, @r"
type:: podcast
show:: My Show
host:: Ann Host
thumbnail:: https://img.example/my-show.jpg
episode-count:: 3
last-episode-date:: 2025-01-15

- ## Deep Work Habits
  episode-link:: [Open in Snipd](https://share.snipd.com/episode/1)
  publish-date:: 2025-01-15
  - ### Summary
    Focus beats multitasking.
  - ### Snips
    - Snip one
  - ### Transcript
    collapsed:: true
    Speaker 1: hello

- ## Morning Routines
  publish-date:: 2025-01-01
  - ### Summary
    Wake up early.

- ## Year in Review
  publish-date:: 2024-12-20
");
    assert!(page.ends_with("2024-12-20\n"));

    let other = fs::read_to_string(out.join("Podcasts___Other Pod.md")).unwrap();
    assert_eq!(
        other,
        "type:: podcast\nshow:: Other Pod\nepisode-count:: 1\n\n- ## Undated Special\n"
    );
}

#[test]
fn rerunning_an_export_changes_nothing() {
    let sandbox = Sandbox::new();
    let export = sandbox.fixture("snipd_export.md");
    let out = sandbox.path().join("pages");
    let args = ["snipd-split", export.to_str().unwrap(), out.to_str().unwrap()];

    sandbox.cmd().args(args).assert().success();
    let first = fs::read_to_string(out.join("Podcasts___My Show.md")).unwrap();

    sandbox
        .cmd()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("My Show: 0 added, 4 skipped (unchanged)"))
        .stdout(predicate::str::contains("Total: 0 added, 5 skipped"));
    let second = fs::read_to_string(out.join("Podcasts___My Show.md")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn new_episodes_merge_into_existing_page() {
    let sandbox = Sandbox::new();
    let out = sandbox.path().join("pages");
    fs::create_dir_all(&out).unwrap();
    fs::write(
        out.join("Podcasts___My Show.md"),
        "type:: podcast\nshow:: My Show\nepisode-count:: 2\nlast-episode-date:: 2025-01-01\n\n\
- ## Morning Routines\n  publish-date:: 2025-01-01\n\n\
- ## Year in Review\n  publish-date:: 2024-12-20\n",
    )
    .unwrap();
    let export = sandbox.path().join("export.md");
    fs::write(
        &export,
        "- ## [[Deep Work Habits]]\n  show:: [[My Show]]\n  publish-date:: [[2025-01-15]]\n\n\
- ## [[Year in Review]]\n  show:: [[my show]]\n  publish-date:: [[2024-12-20]]\n",
    )
    .unwrap();

    sandbox
        .cmd()
        .args(["snipd-split", export.to_str().unwrap(), out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("My Show: 1 added, 1 skipped (updated)"));

    let page = fs::read_to_string(out.join("Podcasts___My Show.md")).unwrap();
    assert!(page.contains("episode-count:: 3\nlast-episode-date:: 2025-01-15\n"));
    let order: Vec<_> = page
        .lines()
        .filter(|line| line.starts_with("- ## "))
        .collect();
    assert_eq!(
        order,
        ["- ## Deep Work Habits", "- ## Morning Routines", "- ## Year in Review"]
    );
}

#[test]
fn unparseable_page_fails_only_its_show() {
    let sandbox = Sandbox::new();
    let export = sandbox.fixture("snipd_export.md");
    let out = sandbox.path().join("pages");
    fs::create_dir_all(&out).unwrap();
    let broken = out.join("Podcasts___My Show.md");
    fs::write(&broken, "Handwritten notes about the show\n").unwrap();

    let (stdout, stderr, exit_code) =
        sandbox.run(&["snipd-split", export.to_str().unwrap(), out.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stdout.contains("  My Show: failed: existing show file"));
    assert!(stdout.contains("  Other Pod: 1 added, 0 skipped (created)"));
    assert!(stderr.contains("could not be updated"));
    assert_eq!(
        fs::read_to_string(&broken).unwrap(),
        "Handwritten notes about the show\n"
    );
    assert!(out.join("Podcasts___Other Pod.md").is_file());
}

#[test]
fn missing_input_is_a_fatal_error() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["snipd-split", "nowhere.md", "pages"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere.md"));
    assert!(!sandbox.path().join("pages").exists());
}

#[test]
fn output_dir_and_naming_come_from_config() {
    let sandbox = Sandbox::new();
    let export = sandbox.fixture("snipd_export.md");
    let out = sandbox.path().join("graph");
    sandbox.write_config(&format!(
        "[snipd]\nnamespace_prefix = \"Shows\"\noutput_dir = \"{}\"\n",
        out.display()
    ));

    sandbox
        .cmd()
        .args(["snipd-split", export.to_str().unwrap()])
        .assert()
        .success();

    assert!(out.join("Shows___My Show.md").is_file());
    assert!(out.join("Shows___Other Pod.md").is_file());
}
