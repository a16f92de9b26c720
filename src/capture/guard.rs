//! Lifecycle guard for the capture child process.
//!
//! The recorded shell must not outlive us. The guard watches for:
//! - SIGINT (Ctrl+C) via ctrlc handler
//! - SIGHUP (terminal hangup) via signal_hook
//! - Parent process death (detected by a changed parent PID)

use std::io;
use std::process::{Child, ExitStatus};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

/// Interval between child status polls.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Why a guarded child was killed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// SIGINT or SIGHUP received.
    Signal,
    /// Our parent process went away.
    Orphaned,
}

/// Result of waiting on a guarded child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The child exited on its own.
    Exited(ExitStatus),
    /// The child was killed.
    Stopped(StopReason),
}

/// Guards a child process against outliving an interrupted or orphaned run.
///
/// Create before spawning, register signals, then use [`ProcessGuard::wait_or_kill`]
/// instead of `.wait()`.
pub struct ProcessGuard {
    interrupted: Arc<AtomicBool>,
    #[cfg(unix)]
    initial_ppid: u32,
}

impl Default for ProcessGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessGuard {
    /// Snapshot the current parent PID for later orphan detection.
    pub fn new() -> Self {
        Self {
            interrupted: Arc::new(AtomicBool::new(false)),
            #[cfg(unix)]
            initial_ppid: parent_pid(),
        }
    }

    /// Register SIGINT and SIGHUP handlers that set the interrupted flag.
    ///
    /// A second registration in the same process is ignored.
    pub fn register_signal_handlers(&self) {
        let flag = self.interrupted.clone();
        if ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)).is_err() {
            debug!("Ctrl-C handler already installed");
        }

        #[cfg(unix)]
        {
            if let Err(e) = signal_hook::flag::register(libc::SIGHUP, self.interrupted.clone()) {
                warn!("Failed to register SIGHUP handler: {}", e);
            }
        }
    }

    /// Whether SIGINT or SIGHUP was received.
    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    /// Wait for `child`, killing it when a stop condition is seen.
    pub fn wait_or_kill(&self, child: &mut Child) -> io::Result<WaitOutcome> {
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(WaitOutcome::Exited(status));
            }
            if let Some(reason) = self.stop_reason() {
                debug!(?reason, pid = child.id(), "Killing capture child");
                let _ = child.kill();
                child.wait()?;
                return Ok(WaitOutcome::Stopped(reason));
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    fn stop_reason(&self) -> Option<StopReason> {
        if self.is_interrupted() {
            Some(StopReason::Signal)
        } else if self.is_orphaned() {
            Some(StopReason::Orphaned)
        } else {
            None
        }
    }

    #[cfg(unix)]
    fn is_orphaned(&self) -> bool {
        parent_pid() != self.initial_ppid
    }

    #[cfg(not(unix))]
    fn is_orphaned(&self) -> bool {
        false
    }

    #[cfg(test)]
    fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }
}

#[cfg(unix)]
fn parent_pid() -> u32 {
    // SAFETY: getppid has no preconditions and cannot fail.
    unsafe { libc::getppid() as u32 }
}
