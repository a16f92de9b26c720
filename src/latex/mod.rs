//! LaTeX generation.
//!
//! - [`color`] - color literal parsing and the custom color registry
//! - [`escape`] - escaping of literal text
//! - [`emitter`] - style scopes for colored output
//! - [`document`] - template parsing and document assembly

pub mod color;
pub mod document;
pub mod emitter;
pub mod escape;

pub use color::{ColorRegistry, ColorSpec, CustomColor, Rgb};
pub use document::{DocumentFields, Segment, Slot, Template, TemplateError, DEFAULT_TEMPLATE};
pub use emitter::{finish_lines, StyleEmitter};
pub use escape::escape_latex;
