//! Command handlers for the cmdlog2tex CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod check;
pub mod completions;
pub mod config;
pub mod convert;
pub mod exec;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use cmdlog2tex::cli::StyleArgs;
use cmdlog2tex::config::{
    debug_enabled, process_env, resolve_template, ConversionConfig, ConvertConfig,
};
use cmdlog2tex::files::{install_support_file, output_dir, read_log, write_document};
use cmdlog2tex::latex::Template;
use cmdlog2tex::Converter;

/// Path the cleaned intermediate log is written to in debug mode.
pub fn debug_log_path(output: &Path) -> PathBuf {
    let mut path = output.as_os_str().to_owned();
    path.push(".cleaned.log");
    PathBuf::from(path)
}

/// Human readable file size.
pub fn format_size(bytes: usize) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Builds a converter from command line flags layered over env and config.
pub fn build_converter(style: &StyleArgs, file: &ConvertConfig) -> Result<Converter> {
    let overrides = style.overrides();
    let config = ConversionConfig::resolve(&overrides, file, process_env);
    info!(mode = %config.mode, theme = %config.theme, "Resolved conversion settings");

    let converter = Converter::new(config);
    match resolve_template(&overrides, file) {
        Some(path) => Ok(converter.with_template(load_template(&path)?)),
        None => Ok(converter),
    }
}

fn load_template(path: &Path) -> Result<Template> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template: {}", path.display()))?;
    Template::parse(&source).with_context(|| format!("Invalid template: {}", path.display()))
}

/// Converts `input` into `output` and installs the support package next to it.
///
/// Nothing is written unless the input could be read.
pub fn convert_file(converter: &Converter, input: &Path, output: &Path) -> Result<()> {
    let log = read_log(input)?;
    let document = converter.convert(&log);

    write_document(output, &document.text)?;
    let support = install_support_file(&output_dir(output))?;
    info!(path = %support.display(), "Installed support package");

    if debug_enabled(process_env) {
        let debug_path = debug_log_path(output);
        write_document(&debug_path, &document.cleaned)?;
        eprintln!("Debug: saved cleaned log to {}", debug_path.display());
    }

    println!(
        "Wrote {} ({}, {} mode)",
        output.display(),
        format_size(document.text.len()),
        converter.config().mode
    );
    if !document.custom_colors.is_empty() {
        println!("Defined {} custom colors", document.custom_colors.len());
    }
    Ok(())
}
