//! Per-show namespace files: parse, merge, render.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::warn;

use super::episode::{Episode, EpisodeKey};
use super::error::ShowFileError;
use super::format::{clean_title, render_show, Header};
use super::parser::{is_boundary, strip_link, EpisodeParser};
use crate::text::{captures, compile_regex};

static HEADER_PROPERTY: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile_regex(r"^([A-Za-z0-9_-]+)::(?:\s+(.*))?$"));

/// Header keys recomputed on every write.
const DERIVED_KEYS: &[&str] = &["type", "episode-count", "last-episode-date"];

/// Contents of one `Podcasts___<Show>.md` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowFile {
    pub show: String,
    pub host: Option<String>,
    pub thumbnail: Option<String>,
    /// Other header properties, kept in file order
    pub properties: Vec<(String, String)>,
    /// Sorted by publish date, newest first, undated last
    pub episodes: Vec<Episode>,
}

impl ShowFile {
    pub fn new(show: impl Into<String>) -> Self {
        Self {
            show: show.into(),
            host: None,
            thumbnail: None,
            properties: Vec::new(),
            episodes: Vec::new(),
        }
    }

    /// Parse a show file written by an earlier run (or by hand).
    ///
    /// Fails rather than guess when content would be lost on rewrite.
    pub fn parse(text: &str) -> Result<Self, ShowFileError> {
        let mut show = None;
        let mut host = None;
        let mut thumbnail = None;
        let mut properties = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            if is_boundary(line) {
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() || (trimmed.starts_with("<!--") && trimmed.ends_with("-->")) {
                continue;
            }
            let Some(caps) = captures(HEADER_PROPERTY.as_ref(), trimmed) else {
                return Err(ShowFileError::UnexpectedPreamble {
                    line: idx + 1,
                    content: trimmed.to_string(),
                });
            };
            let key = caps[1].to_ascii_lowercase();
            let value = caps.get(2).map_or("", |m| m.as_str()).trim();
            match key.as_str() {
                "show" => show = Some(clean_title(strip_link(value))),
                "host" => host = Some(clean_title(strip_link(value))).filter(|h| !h.is_empty()),
                "thumbnail" => thumbnail = Some(value.to_string()).filter(|t| !t.is_empty()),
                k if DERIVED_KEYS.contains(&k) => {}
                _ => properties.push((caps[1].to_string(), value.to_string())),
            }
        }

        let show = show
            .filter(|s| !s.is_empty())
            .ok_or(ShowFileError::MissingShow)?;

        let mut parser = EpisodeParser::with_default_show(text, &show).strict();
        let parsed: Vec<Episode> = parser.by_ref().collect();
        if let Some(skipped) = parser.skipped().first() {
            return Err(ShowFileError::MalformedEpisode {
                line: skipped.line,
                reason: skipped.reason.clone(),
            });
        }

        let mut file = Self {
            show,
            host,
            thumbnail,
            properties,
            episodes: Vec::with_capacity(parsed.len()),
        };
        let mut seen = HashSet::new();
        for episode in parsed {
            if seen.insert(file.key_of(&episode)) {
                file.episodes.push(episode);
            } else {
                warn!(show = %file.show, title = %episode.title, "dropping duplicate episode in show file");
            }
        }
        sort_episodes(&mut file.episodes);
        Ok(file)
    }

    pub fn episode_count(&self) -> usize {
        self.episodes.len()
    }

    pub fn last_episode_date(&self) -> Option<NaiveDate> {
        self.episodes.iter().filter_map(|e| e.publish_date).max()
    }

    /// Identity keys of the stored episodes, under this file's show name.
    pub fn keys(&self) -> HashSet<EpisodeKey> {
        self.keys_for(&self.show)
    }

    /// Identity keys of the stored episodes, re-homed under `show`.
    pub fn keys_for(&self, show: &str) -> HashSet<EpisodeKey> {
        self.episodes
            .iter()
            .map(|e| e.key().with_show(show))
            .collect()
    }

    /// Fill host and thumbnail where this file has none.
    pub fn adopt_metadata(&mut self, host: Option<&str>, thumbnail: Option<&str>) {
        if self.host.is_none() {
            self.host = host.map(str::to_string);
        }
        if self.thumbnail.is_none() {
            self.thumbnail = thumbnail.map(str::to_string);
        }
    }

    /// Add episodes not already present and restore sort order.
    ///
    /// Returns how many were added.
    pub fn merge(&mut self, episodes: impl IntoIterator<Item = Episode>) -> usize {
        let mut keys = self.keys();
        let before = self.episodes.len();
        for episode in episodes {
            if keys.insert(self.key_of(&episode)) {
                self.episodes.push(episode);
            }
        }
        sort_episodes(&mut self.episodes);
        self.episodes.len() - before
    }

    /// Render the whole file with freshly derived header fields.
    pub fn render(&self) -> String {
        let header = Header {
            show: &self.show,
            host: self.host.as_deref(),
            thumbnail: self.thumbnail.as_deref(),
            properties: &self.properties,
            episode_count: self.episode_count(),
            last_episode_date: self.last_episode_date(),
        };
        render_show(&header, &self.episodes)
    }

    fn key_of(&self, episode: &Episode) -> EpisodeKey {
        episode.key().with_show(&self.show)
    }
}

/// Stable sort: newest first, undated last.
pub fn sort_episodes(episodes: &mut [Episode]) {
    episodes.sort_by(|a, b| match (a.publish_date, b.publish_date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
