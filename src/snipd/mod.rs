//! Snipd export splitting.
//!
//! A Snipd Logseq export is one large page with every saved episode. This
//! module splits it into one namespace page per show and merges later exports
//! into those pages without duplicating episodes.

pub mod date;
pub mod episode;
pub mod error;
pub mod format;
pub mod group;
pub mod parser;
pub mod show_file;
pub mod splitter;
pub mod writer;

pub use episode::{normalize_text, Episode, EpisodeKey, Section};
pub use error::{SegmentError, ShowFileError, SplitError};
pub use group::{group_episodes, normalize_show_name, ShowGroup};
pub use parser::{EpisodeParser, SkippedSegment};
pub use show_file::ShowFile;
pub use splitter::{ShowFailure, SplitReport, Splitter};
pub use writer::{ShowOutcome, ShowWriter, WriteStatus};
