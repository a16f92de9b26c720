//! Session capture through util-linux `script`.
//!
//! A commands file is piped into an interactive shell running under
//! `script`, which records everything the terminal shows (escape codes
//! included) into a `.ansilog` file next to the commands file.

pub mod guard;

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, info};

pub use guard::{ProcessGuard, StopReason, WaitOutcome};

/// Program that records the terminal session.
pub const SCRIPT_PROGRAM: &str = "script";

/// Extension of the raw capture file.
pub const LOG_EXTENSION: &str = "ansilog";

/// Errors from capturing a session.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("`script` not found. Please install util-linux first.")]
    ScriptNotFound,
    #[error("Commands file not found: {}", .0.display())]
    CommandsNotFound(PathBuf),
    #[error("Failed to start `script`: {0}")]
    Spawn(#[source] io::Error),
    #[error("Capture interrupted")]
    Interrupted(StopReason),
    #[error("Failed to wait for `script`: {0}")]
    Wait(#[source] io::Error),
}

/// A finished capture.
#[derive(Debug, Clone)]
pub struct Capture {
    /// The raw `.ansilog` file.
    pub log_path: PathBuf,
    /// Exit status of `script`, which mirrors the recorded shell.
    pub status: ExitStatus,
}

/// Path of the capture log for a commands file: same stem, `.ansilog`.
pub fn log_path_for(commands: &Path) -> PathBuf {
    commands.with_extension(LOG_EXTENSION)
}

/// Quotes `s` for a POSIX shell.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Command line `script` runs: the shell reading the commands file on stdin.
pub fn shell_command(shell: &str, commands: &Path) -> String {
    format!("{} < {}", shell, shell_quote(&commands.to_string_lossy()))
}

/// Checks that `script` is available and returns its version line.
pub fn check_script() -> Result<String, CaptureError> {
    let output = Command::new(SCRIPT_PROGRAM)
        .arg("--version")
        .output()
        .map_err(|_| CaptureError::ScriptNotFound)?;

    if !output.status.success() {
        return Err(CaptureError::ScriptNotFound);
    }

    let version = String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    Ok(version)
}

/// Replays `commands` through `shell` under `script`, writing the raw log
/// next to the commands file.
///
/// Blocks until the shell exits. Ctrl-C, SIGHUP or death of the parent
/// process kill the child and yield [`CaptureError::Interrupted`].
pub fn capture_session(commands: &Path, shell: &str) -> Result<Capture, CaptureError> {
    if !commands.is_file() {
        return Err(CaptureError::CommandsNotFound(commands.to_path_buf()));
    }
    check_script()?;

    // script runs the shell from our working directory, so hand it an
    // absolute path
    let commands_abs = commands
        .canonicalize()
        .unwrap_or_else(|_| commands.to_path_buf());
    let log_path = log_path_for(commands);
    let command = shell_command(shell, &commands_abs);
    info!(command = %command, log = %log_path.display(), "Starting capture");

    let guard = ProcessGuard::new();
    guard.register_signal_handlers();

    let mut child = Command::new(SCRIPT_PROGRAM)
        .arg("-q")
        .arg("-c")
        .arg(&command)
        .arg(&log_path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(CaptureError::Spawn)?;

    match guard.wait_or_kill(&mut child).map_err(CaptureError::Wait)? {
        WaitOutcome::Exited(status) => {
            debug!(?status, "Capture finished");
            Ok(Capture { log_path, status })
        }
        WaitOutcome::Stopped(reason) => Err(CaptureError::Interrupted(reason)),
    }
}
