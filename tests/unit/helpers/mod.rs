//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use kbtidy::files::NamespaceName;
use kbtidy::snipd::Splitter;
use kbtidy::Episode;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Splitter with the default `Podcasts___` naming
pub fn splitter() -> Splitter {
    Splitter::new(NamespaceName::new("Podcasts", "___"))
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Minimal dated episode
pub fn episode(show: &str, title: &str, date: Option<NaiveDate>) -> Episode {
    Episode {
        show: show.to_string(),
        title: title.to_string(),
        publish_date: date,
        ..Episode::default()
    }
}
