//! Writing generated documents and the bundled support package.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// File name of the LaTeX package the generated documents load.
pub const SUPPORT_FILE_NAME: &str = "terminalboxes.sty";

/// Contents of the bundled `terminalboxes` package.
pub const SUPPORT_FILE: &str = include_str!("../../assets/terminalboxes.sty");

/// Directory a document at `path` is written into.
pub fn output_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Writes `contents` to `path` atomically.
///
/// Uses a temp file in the same directory and renames it over the target,
/// so readers see either the previous file or the complete new one.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    let dir = output_dir(path);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let mut temp_name = path
        .file_name()
        .with_context(|| format!("Output path has no file name: {}", path.display()))?
        .to_owned();
    temp_name.push(".tmp");
    let temp_path = dir.join(temp_name);

    fs::write(&temp_path, contents)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| format!("Failed to write output: {}", path.display()));
    }

    debug!(path = %path.display(), bytes = contents.len(), "Wrote document");
    Ok(())
}

/// Writes the bundled `terminalboxes.sty` into `dir`, returning its path.
pub fn install_support_file(dir: &Path) -> Result<PathBuf> {
    let target = dir.join(SUPPORT_FILE_NAME);
    write_document(&target, SUPPORT_FILE)
        .with_context(|| format!("Failed to install {}", SUPPORT_FILE_NAME))?;
    Ok(target)
}
