//! ANSI escape sequence handling.
//!
//! - [`scanner`] - tokenizes captured output and classifies escape sequences
//! - [`strip`] - removes control codes, optionally keeping SGR styling
//! - [`sgr`] - interprets SGR parameters into a [`StyleState`]

pub mod scanner;
pub mod sgr;
pub mod strip;

pub use scanner::{tokenize, Scanner, Sequence, SequenceKind, Token};
pub use sgr::{interpret_sgr, AnsiColor, StyleState};
pub use strip::strip;
