//! CLI definitions for kbtidy
//!
//! The clap structure lives in the library so tests can build the command
//! without running the binary.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::outline::ParagraphMode;

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "kbtidy")]
#[command(about = "[ kbtidy ] - keep a Logseq knowledge base tidy")]
#[command(
    long_about = "kbtidy - batch cleanups for a Logseq graph.

Splits Snipd podcast exports into one page per show, removes empty sections
from journal pages, turns plain Markdown into outlines and strips citation
links from copied AI answers.

QUICK START:
    kbtidy snipd-split export.md pages/      Split an export into show pages
    kbtidy clean-journal --dry-run           Preview journal cleanup
    kbtidy outline notes.md -o outline.md    Convert Markdown to an outline
    pbpaste | kbtidy clean-sources           Strip citations from the clipboard

Configuration: ~/.config/kbtidy/config.toml (see `kbtidy config show`)"
)]
#[command(version = crate::VERSION.as_str())]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a Snipd export into per-show pages
    #[command(long_about = "Split a Snipd Logseq export into one namespace page per show.

Every episode in the export lands in <prefix><separator><Show>.md (by default
Podcasts___<Show>.md). Existing pages are merged: episodes already present are
skipped, the header is recomputed and episodes are sorted newest first.
Running the same export twice leaves every page byte-identical.

EXAMPLES:
    kbtidy snipd-split snipd_export.md                Write pages to the current directory
    kbtidy snipd-split snipd_export.md ~/logseq/pages Write pages into a graph
    kbtidy -v snipd-split export.md out/              Log every file written")]
    SnipdSplit {
        /// Snipd export file
        #[arg(help = "Snipd export Markdown file")]
        input: PathBuf,
        /// Output directory
        #[arg(help = "Output directory (default: [snipd].output_dir or current directory)")]
        output_dir: Option<PathBuf>,
    },

    /// Remove empty sections from journal pages
    #[command(long_about = "Remove sections without content from dated journal pages.

A section is a `## heading` (or `- ## heading`) and the lines indented below
it. Sections holding nothing but blank lines or other headings are removed.

Without --date, every page from the last [journal].lookback_days days is
cleaned, except today's page unless --all is given.

EXAMPLES:
    kbtidy clean-journal                       Clean past pages
    kbtidy clean-journal --date 2025-01-15     Clean one day
    kbtidy clean-journal --all --dry-run       Preview, including today
    kbtidy clean-journal --dir ~/logseq/journals")]
    CleanJournal {
        /// Clean only this date (YYYY-MM-DD)
        #[arg(long, help = "Clean only this date (YYYY-MM-DD)")]
        date: Option<String>,
        /// Include today's page
        #[arg(long, help = "Include today's page")]
        all: bool,
        /// List changes without writing
        #[arg(long, help = "Show which pages would change without writing")]
        dry_run: bool,
        /// Journal directory
        #[arg(long, help = "Journal directory (default: [journal].directory or $LOGSEQ_JOURNAL_DIR)")]
        dir: Option<PathBuf>,
    },

    /// Convert Markdown into a Logseq outline
    #[command(long_about = "Convert Markdown headings and paragraphs into a Logseq outline.

Heading level n becomes a bullet at depth n-1; paragraphs become bullets
under the last heading. `key:: value` lines stay properties.

EXAMPLES:
    kbtidy outline article.md                       Print the outline
    kbtidy outline article.md -o page.md            Write to a file
    kbtidy outline --paragraph-mode blocks < in.md  One bullet per paragraph")]
    Outline {
        /// Input file (stdin when omitted)
        #[arg(help = "Input Markdown file (reads stdin when omitted)")]
        input: Option<PathBuf>,
        /// How paragraph lines become bullets
        #[arg(long, value_enum, default_value_t = ParagraphMode::Lines)]
        paragraph_mode: ParagraphMode,
        /// Output file (stdout when omitted)
        #[arg(short, long, help = "Output file (writes stdout when omitted)")]
        output: Option<PathBuf>,
    },

    /// Strip citation links and invisible characters
    #[command(long_about = "Remove Perplexity-style citation links such as [source](url) and
[source+2](url), invisible Unicode characters and doubled spaces.

EXAMPLES:
    kbtidy clean-sources answer.md              Print cleaned text
    kbtidy clean-sources answer.md -o clean.md  Write to a file
    kbtidy clean-sources answer.md -i           Clean in place
    kbtidy clean-sources answer.md --preview    Show changed lines on stderr
    pbpaste | kbtidy clean-sources              Clean stdin")]
    CleanSources {
        /// Input file (stdin when omitted)
        #[arg(help = "Input file (reads stdin when omitted)")]
        input: Option<PathBuf>,
        /// Output file
        #[arg(short, long, help = "Output file (writes stdout when omitted)")]
        output: Option<PathBuf>,
        /// Overwrite the input file
        #[arg(
            short,
            long,
            conflicts_with = "output",
            requires = "input",
            help = "Overwrite the input file"
        )]
        in_place: bool,
        /// Print before/after lines to stderr without writing
        #[arg(long, help = "Print changed lines to stderr without writing")]
        preview: bool,
    },

    /// Configuration management
    #[command(long_about = "Inspect kbtidy configuration.

Configuration is read from ~/.config/kbtidy/config.toml. Missing files and
missing keys fall back to defaults.

EXAMPLE:
    kbtidy config show")]
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Print a shell completion script to stdout.

EXAMPLES:
    kbtidy completions bash > ~/.local/share/bash-completion/completions/kbtidy
    kbtidy completions zsh > ~/.zfunc/_kbtidy
    kbtidy completions fish > ~/.config/fish/completions/kbtidy.fish")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the effective configuration in TOML format.

Shows every setting, including defaults for keys missing from the file.

EXAMPLE:
    kbtidy config show")]
    Show,
}
