//! cmdlog2tex Library
//!
//! Converts terminal output captured with ANSI escape codes into LaTeX
//! documents, either as a verbatim transcript or with colors and emphasis
//! reproduced as markup.

pub mod ansi;
pub mod capture;
pub mod cli;
pub mod config;
pub mod convert;
pub mod files;
pub mod latex;
pub mod logging;

pub use ansi::{interpret_sgr, strip, StyleState};
pub use config::{Config, ConversionConfig, Mode, Theme};
pub use convert::{Converter, Document};
pub use files::{read_log, write_document, InputError};
