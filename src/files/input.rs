//! Reading captured logs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors from reading an input log.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to read input file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a log file and decodes it as UTF-8, substituting invalid bytes.
pub fn read_log(path: &Path) -> Result<String, InputError> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            InputError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            InputError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read input log");
    Ok(decode_lossy(bytes))
}

/// Decodes bytes as UTF-8, replacing malformed sequences with U+FFFD.
pub fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!("Input is not valid UTF-8, substituting invalid bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
