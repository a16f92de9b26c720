//! Configuration type definitions and defaults

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Title shown on the terminal box when none is configured.
pub const DEFAULT_TITLE: &str = "Terminal";

/// Shell that replays the commands file in `exec`.
pub const DEFAULT_SHELL: &str = "bash --login -i";

/// Output style of the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Verbatim transcript with every escape code removed.
    Plain,
    /// Colors and emphasis reproduced as LaTeX markup.
    #[default]
    Colored,
}

impl Mode {
    /// Name of the `terminalboxes` environment used for this mode.
    pub fn environment(self) -> &'static str {
        match self {
            Mode::Plain => "terminalplain",
            Mode::Colored => "terminalcolored",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Plain => "plain",
            Mode::Colored => "colored",
        }
    }
}

/// Color scheme of the terminal box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Black background, for reading on screen.
    #[default]
    Dark,
    /// White background, for print.
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// A configuration value outside its allowed set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid {kind} '{value}' (expected one of: {expected})")]
pub struct InvalidValue {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for Mode {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Mode::Plain),
            "colored" => Ok(Mode::Colored),
            _ => Err(InvalidValue {
                kind: "mode",
                value: s.to_string(),
                expected: "plain, colored",
            }),
        }
    }
}

impl FromStr for Theme {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(InvalidValue {
                kind: "theme",
                value: s.to_string(),
                expected: "dark, light",
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main configuration structure (`~/.config/cmdlog2tex/config.toml`).
///
/// Every field is optional; unset fields fall through to the environment
/// and then to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub exec: ExecConfig,
}

/// `[convert]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Custom document template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

/// `[exec]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecConfig {
    /// Shell command the commands file is piped into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
    /// Keep the raw `.ansilog` capture after conversion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_log: Option<bool>,
}

/// Settings handed to the converter; fixed for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    pub mode: Mode,
    pub theme: Theme,
    pub title: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            theme: Theme::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionOverrides {
    pub mode: Option<Mode>,
    pub theme: Option<Theme>,
    pub title: Option<String>,
    pub template: Option<PathBuf>,
}

/// Resolved settings for `exec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecSettings {
    pub shell: String,
    pub keep_log: bool,
}

impl Default for ExecSettings {
    fn default() -> Self {
        Self {
            shell: DEFAULT_SHELL.to_string(),
            keep_log: true,
        }
    }
}
