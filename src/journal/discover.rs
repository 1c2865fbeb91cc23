//! Locating journal pages by date.

use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};

use super::JournalError;

/// File names a journal page for `date` may have, in lookup order.
pub fn candidate_names(date: NaiveDate) -> [String; 4] {
    let dashed = date.format("%Y-%m-%d").to_string();
    let underscored = date.format("%Y_%m_%d").to_string();
    [
        format!("{dashed}.md"),
        format!("{underscored}.md"),
        format!("journal_{dashed}.md"),
        format!("{dashed}_journal.md"),
    ]
}

/// First existing page for `date`.
pub fn find_journal_file(dir: &Path, date: NaiveDate) -> Option<PathBuf> {
    candidate_names(date)
        .into_iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Pages from `lookback_days` before `today` up to `today`, oldest first.
///
/// Today's page is only included when `include_today` is set.
pub fn find_journal_files(
    dir: &Path,
    today: NaiveDate,
    lookback_days: u32,
    include_today: bool,
) -> Vec<(NaiveDate, PathBuf)> {
    let start = today
        .checked_sub_days(Days::new(u64::from(lookback_days)))
        .unwrap_or(NaiveDate::MIN);

    start
        .iter_days()
        .take_while(|date| *date <= today)
        .filter(|date| include_today || *date < today)
        .filter_map(|date| find_journal_file(dir, date).map(|path| (date, path)))
        .collect()
}

/// Parse a `--date` argument.
pub fn parse_date_arg(input: &str) -> Result<NaiveDate, JournalError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| JournalError::InvalidDate {
        input: input.to_string(),
    })
}
