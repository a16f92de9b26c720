//! Conversion session: raw log text in, LaTeX document out.
//!
//! Each call to [`Converter::convert`] owns its own color registry, so
//! conversions never share state and a converter can be reused freely.

use tracing::debug;

use crate::ansi::strip;
use crate::config::{ConversionConfig, Mode};
use crate::latex::{
    escape_latex, ColorRegistry, CustomColor, DocumentFields, StyleEmitter, Template,
};

/// Output of one conversion.
#[derive(Debug, Clone)]
pub struct Document {
    /// Complete document text.
    pub text: String,
    /// Body placed inside the terminal environment.
    pub body: String,
    /// Stripper output the body was built from.
    pub cleaned: String,
    /// Custom colors defined in the preamble, in identifier order.
    pub custom_colors: Vec<CustomColor>,
}

/// Converts captured terminal output into LaTeX documents.
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConversionConfig,
    template: Template,
}

impl Converter {
    /// Creates a converter using the built-in template.
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            config,
            template: Template::default(),
        }
    }

    /// Replaces the document template.
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Converts one log. Never fails: unknown sequences and malformed
    /// colors degrade to unstyled text.
    pub fn convert(&self, log: &str) -> Document {
        let mut colors = ColorRegistry::new();

        let (cleaned, body) = match self.config.mode {
            Mode::Plain => {
                // terminalplain is listings based and does its own escaping
                let cleaned = strip(log, false);
                let body = cleaned.clone();
                (cleaned, body)
            }
            Mode::Colored => {
                let cleaned = strip(log, true);
                let body = StyleEmitter::new(&mut colors).emit(&cleaned);
                (cleaned, body)
            }
        };
        debug!(
            mode = %self.config.mode,
            input_bytes = log.len(),
            body_bytes = body.len(),
            custom_colors = colors.len(),
            "Converted log"
        );

        let color_defs = colors.definitions();
        let title = escape_latex(&self.config.title);
        let text = self.template.render(&DocumentFields {
            color_defs: &color_defs,
            env_name: self.config.mode.environment(),
            theme: self.config.theme.as_str(),
            title: &title,
            content: &body,
        });

        Document {
            text,
            body,
            cleaned,
            custom_colors: colors.iter().cloned().collect(),
        }
    }
}
