//! Check command handler

use anyhow::{bail, Result};

use cmdlog2tex::capture::{check_script, SCRIPT_PROGRAM};

/// Report whether the external tools are available.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    match check_script() {
        Ok(version) => {
            println!("{}: ok ({})", SCRIPT_PROGRAM, version);
            Ok(())
        }
        Err(e) => {
            println!("{}: missing", SCRIPT_PROGRAM);
            bail!("{} (needed by `exec`; `convert` works without it)", e)
        }
    }
}
