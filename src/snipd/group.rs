//! Grouping episodes by show and suppressing duplicates.

use std::collections::{HashMap, HashSet};

use super::episode::{normalize_text, Episode, EpisodeKey};

/// Normalized show name used as a grouping key and for file lookup.
pub fn normalize_show_name(name: &str) -> String {
    normalize_text(name)
}

/// All episodes of one show from one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowGroup {
    key: String,
    /// Show name as first written in the export
    pub display: String,
    pub host: Option<String>,
    pub thumbnail: Option<String>,
    /// Unique episodes in parse order
    pub episodes: Vec<Episode>,
    /// Episodes dropped because an earlier one had the same identity
    pub duplicates: usize,
}

impl ShowGroup {
    fn new(first: &Episode) -> Self {
        Self {
            key: normalize_show_name(&first.show),
            display: first.show.clone(),
            host: None,
            thumbnail: None,
            episodes: Vec::new(),
            duplicates: 0,
        }
    }

    /// Normalized show name shared by every episode in the group.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Split episodes into those not yet in `existing` and those that are.
    ///
    /// `existing` holds keys under this group's show name; see
    /// [`EpisodeKey::with_show`].
    pub fn partition_against(&self, existing: &HashSet<EpisodeKey>) -> (Vec<Episode>, Vec<Episode>) {
        self.episodes
            .iter()
            .cloned()
            .partition(|episode| !existing.contains(&episode.key().with_show(&self.display)))
    }
}

/// Group episodes by normalized show name, in first-appearance order.
///
/// Within a group the first episode with a given [`EpisodeKey`] wins; later
/// ones are counted in [`ShowGroup::duplicates`]. Host and thumbnail come from
/// the first episode that has them.
pub fn group_episodes(episodes: impl IntoIterator<Item = Episode>) -> Vec<ShowGroup> {
    let mut groups: Vec<ShowGroup> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();
    let mut seen: HashSet<EpisodeKey> = HashSet::new();

    for episode in episodes {
        let idx = *by_key
            .entry(normalize_show_name(&episode.show))
            .or_insert_with(|| {
                groups.push(ShowGroup::new(&episode));
                groups.len() - 1
            });
        let group = &mut groups[idx];

        if !seen.insert(episode.key()) {
            group.duplicates += 1;
            continue;
        }
        if group.host.is_none() {
            group.host = episode.host.clone();
        }
        if group.thumbnail.is_none() {
            group.thumbnail = episode.thumbnail.clone();
        }
        group.episodes.push(episode);
    }

    groups
}
