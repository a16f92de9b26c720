//! Exec command handler

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use cmdlog2tex::capture::{capture_session, CaptureError};
use cmdlog2tex::cli::StyleArgs;
use cmdlog2tex::config::{process_env, ExecSettings};
use cmdlog2tex::Config;

use super::{build_converter, convert_file};

/// Exit status after an interrupted capture (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Handle the exec command: capture a session, then convert it.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    input: &Path,
    output: &Path,
    shell: Option<String>,
    no_log: bool,
    style: &StyleArgs,
) -> Result<()> {
    let config = Config::load()?;
    let settings = ExecSettings::resolve(shell, no_log, &config.exec, process_env);
    // fail on a bad template before running anything
    let converter = build_converter(style, &config.convert)?;

    println!("Running {} with: {}", input.display(), settings.shell);
    let capture = match capture_session(input, &settings.shell) {
        Ok(capture) => capture,
        Err(CaptureError::Interrupted(reason)) => {
            eprintln!("Interrupted ({:?}), no document written.", reason);
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
        Err(e) => return Err(e.into()),
    };

    if !capture.status.success() {
        eprintln!(
            "Warning: shell exited with {}, converting the capture anyway",
            capture.status
        );
    }
    println!("Captured session to {}", capture.log_path.display());

    convert_file(&converter, &capture.log_path, output)?;

    if !settings.keep_log {
        fs::remove_file(&capture.log_path).with_context(|| {
            format!("Failed to remove capture: {}", capture.log_path.display())
        })?;
    }
    Ok(())
}
