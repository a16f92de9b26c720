//! Style emitter for colored output.
//!
//! Walks the style-only stream produced by [`crate::ansi::strip`], tracks
//! the SGR state and wraps literal text in LaTeX style scopes. Scopes never
//! span a line ending: each line of the body is balanced on its own, and text
//! on the next line reopens whatever the state still requires.

use tracing::trace;

use super::color::ColorRegistry;
use super::escape::escape_latex;
use crate::ansi::{interpret_sgr, tokenize, AnsiColor, SequenceKind, StyleState, Token};

/// Markup line break appended to every non-empty body line.
const LINE_BREAK: &str = " \\\\";

/// Palette entries, each usable as foreground or background.
const COLOR_SLOTS: usize = 32;

/// Converts a style-only stream into the body of a `terminalcolored` block.
pub struct StyleEmitter<'r> {
    colors: &'r mut ColorRegistry,
    state: StyleState,
    /// Number of `}` owed for the scopes opened on the current line.
    open_scopes: usize,
    /// Resolved markup names: foreground slots first, then background.
    color_names: [Option<Option<String>>; COLOR_SLOTS],
    line: String,
    lines: Vec<String>,
}

impl<'r> StyleEmitter<'r> {
    pub fn new(colors: &'r mut ColorRegistry) -> Self {
        Self {
            colors,
            state: StyleState::default(),
            open_scopes: 0,
            color_names: Default::default(),
            line: String::new(),
            lines: Vec::new(),
        }
    }

    /// Emits the LaTeX body for `stream`. Custom colors end up in the
    /// registry passed to [`StyleEmitter::new`].
    pub fn emit(mut self, stream: &str) -> String {
        let tokens = tokenize(stream);
        let mut i = 0;
        while i < tokens.len() {
            match tokens[i] {
                Token::Text(text) => self.push_text(text),
                Token::Sequence(seq) if seq.kind == SequenceKind::Sgr => {
                    let next = interpret_sgr(&seq.sgr_params(), &self.state);
                    if next != self.state {
                        self.close_scopes();
                        self.state = next;
                    }
                }
                Token::Sequence(seq) => {
                    trace!(kind = ?seq.kind, raw = ?seq.raw, "Ignoring non-style sequence");
                }
                Token::CarriageReturn if followed_by_line_feed(&tokens[i + 1..]) => {}
                Token::LineFeed | Token::CarriageReturn => self.end_line(),
                Token::Backspace | Token::Control(_) => {}
            }
            i += 1;
        }
        self.end_line();
        finish_lines(self.lines)
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.open_scopes == 0 {
            self.open_scopes();
        }
        self.line.push_str(&escape_latex(text));
    }

    /// Opens wrappers for the current state in fixed order: bold, italic,
    /// foreground, background.
    fn open_scopes(&mut self) {
        let state = self.state;
        if state.bold {
            self.open("\\textbf{");
        }
        if state.italic {
            self.open("\\textit{");
        }
        if let Some(color) = state.foreground {
            if let Some(name) = self.color_name(color, false) {
                self.open(&format!("\\textcolor{{{}}}{{", name));
            }
        }
        if let Some(color) = state.background {
            if let Some(name) = self.color_name(color, true) {
                self.open(&format!("\\colorbox{{{}}}{{", name));
            }
        }
    }

    /// Markup name for a palette color, resolved once per emitter.
    fn color_name(&mut self, color: AnsiColor, background: bool) -> Option<String> {
        let slot = color as usize + if background { COLOR_SLOTS / 2 } else { 0 };
        if let Some(name) = &self.color_names[slot] {
            return name.clone();
        }
        let literal = if background {
            color.background_literal()
        } else {
            color.foreground_literal()
        };
        let name = self.colors.resolve(literal);
        self.color_names[slot] = Some(name.clone());
        name
    }

    fn open(&mut self, wrapper: &str) {
        self.line.push_str(wrapper);
        self.open_scopes += 1;
    }

    fn close_scopes(&mut self) {
        for _ in 0..self.open_scopes {
            self.line.push('}');
        }
        self.open_scopes = 0;
    }

    fn end_line(&mut self) {
        self.close_scopes();
        self.lines.push(std::mem::take(&mut self.line));
    }
}

/// Whether the next non-sequence token is a line feed, so a CR before it
/// ends nothing on its own.
fn followed_by_line_feed(rest: &[Token<'_>]) -> bool {
    rest.iter()
        .find(|token| !matches!(token, Token::Sequence(_)))
        .is_some_and(|token| *token == Token::LineFeed)
}

/// Joins emitted lines into the final body: trailing spacing is trimmed,
/// non-empty lines get a markup line break, and blank lines at either end
/// are dropped.
pub fn finish_lines(lines: Vec<String>) -> String {
    let processed: Vec<String> = lines
        .iter()
        .map(|line| {
            let trimmed = trim_line_end(line);
            if trimmed.is_empty() {
                String::new()
            } else {
                format!("{}{}", trimmed, LINE_BREAK)
            }
        })
        .collect();

    let start = processed
        .iter()
        .position(|line| !line.is_empty())
        .unwrap_or(processed.len());
    let end = processed
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(start, |i| i + 1);

    processed[start..end].join("\n")
}

/// Strips trailing whitespace, including forced spaces (`\ `) left by
/// [`escape_latex`].
fn trim_line_end(line: &str) -> &str {
    let mut trimmed = line.trim_end();
    while let Some(rest) = trimmed.strip_suffix('\\') {
        // `\\` would be an escaped backslash sequence, not a forced space
        if rest.ends_with('\\') {
            break;
        }
        trimmed = rest.trim_end();
    }
    trimmed
}
