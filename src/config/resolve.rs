//! Resolution of effective settings.
//!
//! Every value is taken from the first source that provides it:
//! command line, environment, config file, built-in default. The
//! environment is passed in as a lookup function so resolution stays
//! testable without touching the process environment.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use super::types::{
    ConversionConfig, ConversionOverrides, ConvertConfig, ExecConfig, ExecSettings, DEFAULT_SHELL,
    DEFAULT_TITLE,
};

/// Default mode (`plain` or `colored`).
pub const ENV_MODE: &str = "LOG2TEX_MODE";
/// Default theme (`dark` or `light`).
pub const ENV_THEME: &str = "LOG2TEX_THEME";
/// Shell used by `exec`.
pub const ENV_SHELL: &str = "CMD2TEX_SHELL";
/// When set to a non-empty value, the cleaned stream is written next to the output.
pub const ENV_DEBUG: &str = "LOG2TEX_DEBUG";

/// Reads a variable from the process environment.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Parses an environment value, logging and skipping invalid ones.
fn env_value<T, F>(env: &F, name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = env(name)?;
    if raw.trim().is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(variable = name, "Ignoring environment value: {}", e);
            None
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ConversionConfig {
    /// Resolves mode, theme and title.
    pub fn resolve<F>(overrides: &ConversionOverrides, file: &ConvertConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = overrides
            .mode
            .or_else(|| env_value(&env, ENV_MODE))
            .or(file.mode)
            .unwrap_or_default();
        let theme = overrides
            .theme
            .or_else(|| env_value(&env, ENV_THEME))
            .or(file.theme)
            .unwrap_or_default();
        let title = non_empty(overrides.title.clone())
            .or_else(|| non_empty(file.title.clone()))
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Self { mode, theme, title }
    }
}

/// Template file to use, if any: command line first, then config file.
pub fn resolve_template(overrides: &ConversionOverrides, file: &ConvertConfig) -> Option<PathBuf> {
    overrides.template.clone().or_else(|| file.template.clone())
}

impl ExecSettings {
    /// Resolves the replay shell and whether the raw capture is kept.
    pub fn resolve<F>(shell: Option<String>, no_log: bool, file: &ExecConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let shell = non_empty(shell)
            .or_else(|| non_empty(env(ENV_SHELL)))
            .or_else(|| non_empty(file.shell.clone()))
            .unwrap_or_else(|| DEFAULT_SHELL.to_string());
        let keep_log = !no_log && file.keep_log.unwrap_or(true);

        Self { shell, keep_log }
    }
}

/// Whether debug output of the cleaned stream is requested.
pub fn debug_enabled<F>(env: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(env(ENV_DEBUG)).is_some()
}
