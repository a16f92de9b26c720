//! Configuration management for cmdlog2tex

mod io;
mod resolve;
mod types;

pub use resolve::*;
pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/cmdlog2tex/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// The configuration actually in effect, with every field filled in
    /// from the environment and defaults.
    pub fn effective<F>(&self, env: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides = ConversionOverrides::default();
        let conversion = ConversionConfig::resolve(&overrides, &self.convert, &env);
        let exec = ExecSettings::resolve(None, false, &self.exec, &env);

        Config {
            convert: ConvertConfig {
                mode: Some(conversion.mode),
                theme: Some(conversion.theme),
                title: Some(conversion.title),
                template: resolve_template(&overrides, &self.convert),
            },
            exec: ExecConfig {
                shell: Some(exec.shell),
                keep_log: Some(exec.keep_log),
            },
        }
    }

    /// Serialize as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
