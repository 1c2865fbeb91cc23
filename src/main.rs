//! kbtidy - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kbtidy::cli::{Cli, Commands, ConfigCommands};

use commands::journal::JournalArgs;
use commands::sources::SourcesArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides; otherwise -v => info, -vv => debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match cli.verbose {
            0 => "kbtidy=warn",
            1 => "kbtidy=info",
            _ => "kbtidy=debug",
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    match cli.command {
        Commands::SnipdSplit { input, output_dir } => commands::split::handle(&input, output_dir),
        Commands::CleanJournal {
            date,
            all,
            dry_run,
            dir,
        } => commands::journal::handle(JournalArgs {
            date,
            all,
            dry_run,
            dir,
        }),
        Commands::Outline {
            input,
            paragraph_mode,
            output,
        } => commands::outline::handle(input, paragraph_mode, output),
        Commands::CleanSources {
            input,
            output,
            in_place,
            preview,
        } => commands::sources::handle(SourcesArgs {
            input,
            output,
            in_place,
            preview,
        }),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
