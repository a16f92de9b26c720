//! Document assembly from a template with named placeholders.
//!
//! Placeholders are written `<<name>>`. The built-in template produces a
//! standalone `ctexart` document that loads the bundled `terminalboxes`
//! package; a user template can replace it as long as it has a
//! `<<content>>` slot.

use std::fmt;

use thiserror::Error;

/// Built-in document template.
pub const DEFAULT_TEMPLATE: &str = r"% Generated by cmdlog2tex
\documentclass{ctexart}
\usepackage[margin=1in]{geometry}
\usepackage{terminalboxes}

<<color_defs>>

% ============================================================================
% terminalplain   - listings based, reproduces text verbatim
% terminalcolored - takes LaTeX markup, lines end with \\
%
% Both environments take a title and a theme (dark or light):
%   \begin{terminalplain}{Terminal}{dark}
%     $ ls
%   \end{terminalplain}
% ============================================================================

\begin{document}

\begin{<<env_name>>}{<<title>>}{<<theme>>}
<<content>>
\end{<<env_name>>}

\end{document}
";

/// Errors from parsing a document template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template cannot be empty")]
    Empty,
    #[error("Unclosed placeholder in template (missing '>>')")]
    UnclosedPlaceholder,
    #[error("Unknown template placeholder: <<{0}>>")]
    UnknownPlaceholder(String),
    #[error("Template has no <<content>> placeholder")]
    MissingContent,
}

/// Values a template placeholder can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    ColorDefs,
    EnvName,
    Theme,
    Title,
    Content,
}

impl Slot {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "color_defs" => Some(Slot::ColorDefs),
            "env_name" => Some(Slot::EnvName),
            "theme" => Some(Slot::Theme),
            "title" => Some(Slot::Title),
            "content" => Some(Slot::Content),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Slot::ColorDefs => "color_defs",
            Slot::EnvName => "env_name",
            Slot::Theme => "theme",
            Slot::Title => "title",
            Slot::Content => "content",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<<{}>>", self.name())
    }
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(Slot),
}

/// Substitution values for [`Template::render`].
#[derive(Debug, Clone, Copy)]
pub struct DocumentFields<'a> {
    pub color_defs: &'a str,
    pub env_name: &'a str,
    pub theme: &'a str,
    /// Already escaped for LaTeX.
    pub title: &'a str,
    pub content: &'a str,
}

impl DocumentFields<'_> {
    fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::ColorDefs => self.color_defs,
            Slot::EnvName => self.env_name,
            Slot::Theme => self.theme,
            Slot::Title => self.title,
            Slot::Content => self.content,
        }
    }
}

/// A parsed document template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Default for Template {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE).expect("Default template should be valid")
    }
}

impl Template {
    /// Parses a template string into segments.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        if template.trim().is_empty() {
            return Err(TemplateError::Empty);
        }

        let mut segments = Vec::new();
        let mut rest = template;

        while let Some(start) = rest.find("<<") {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let after_open = &rest[start + 2..];
            let end = after_open
                .find(">>")
                .ok_or(TemplateError::UnclosedPlaceholder)?;
            let name = after_open[..end].trim();
            let slot = Slot::from_name(name)
                .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))?;
            segments.push(Segment::Placeholder(slot));
            rest = &after_open[end + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        if !segments.contains(&Segment::Placeholder(Slot::Content)) {
            return Err(TemplateError::MissingContent);
        }

        Ok(Self { segments })
    }

    /// Returns the parsed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Substitutes every placeholder. Values are inserted as-is.
    pub fn render(&self, fields: &DocumentFields<'_>) -> String {
        let mut result = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => result.push_str(s),
                Segment::Placeholder(slot) => result.push_str(fields.get(*slot)),
            }
        }
        result
    }
}
