//! outline command handler

use std::path::{Path, PathBuf};

use anyhow::Result;

use kbtidy::outline::{convert_to_outline, OutlineOptions, ParagraphMode};
use kbtidy::Config;

use super::{read_input, write_output};

#[cfg(not(tarpaulin_include))]
pub fn handle(
    input: Option<PathBuf>,
    paragraph_mode: ParagraphMode,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load()?;
    let options = OutlineOptions {
        paragraph_mode,
        indent_width: config.outline.indent_width,
    };
    run(input.as_deref(), output.as_deref(), &options)
}

pub fn run(input: Option<&Path>, output: Option<&Path>, options: &OutlineOptions) -> Result<()> {
    let markdown = read_input(input)?;
    write_output(output, &convert_to_outline(&markdown, options))
}
