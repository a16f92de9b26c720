//! Convert command handler

use anyhow::Result;
use std::path::Path;

use cmdlog2tex::cli::StyleArgs;
use cmdlog2tex::Config;

use super::{build_converter, convert_file};

/// Handle the convert command.
#[cfg(not(tarpaulin_include))]
pub fn handle(input: &Path, output: &Path, style: &StyleArgs) -> Result<()> {
    let config = Config::load()?;
    let converter = build_converter(style, &config.convert)?;
    convert_file(&converter, input, output)
}
