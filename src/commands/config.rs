//! Config subcommands handler

use anyhow::Result;

use cmdlog2tex::config::process_env;
use cmdlog2tex::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let effective = config.effective(process_env);
    print!("{}", effective.to_toml()?);
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
