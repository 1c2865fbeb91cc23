//! Completions command handler

use std::io::{self, Write};

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

/// Print the completion script for `shell` to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle<C: CommandFactory>(shell: CompletionShell) -> Result<()> {
    let mut stdout = io::stdout();
    write_completions::<C>(shell, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Generate a completion script into any writer.
pub fn write_completions<C: CommandFactory>(
    shell: CompletionShell,
    out: &mut dyn Write,
) -> Result<()> {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "kbtidy", out);
    Ok(())
}
