//! Escape-sequence stripper.
//!
//! Reduces a raw capture to either fully plain text or text that only keeps
//! style (SGR) codes, dropping everything that has no visual meaning in a
//! static transcript: window titles, private modes, cursor movement, erase
//! codes and in-place redraws.

use tracing::trace;

use super::scanner::{tokenize, Sequence, SequenceKind, Token};

/// Strip terminal control codes from `text`.
///
/// With `keep_style_codes` set, SGR sequences (and unclassified CSI
/// sequences) are passed through untouched and carriage-return runs collapse
/// to a single `\r`. Otherwise the result is plain text with LF line endings
/// and at most one blank line in a row.
pub fn strip(text: &str, keep_style_codes: bool) -> String {
    let tokens = tokenize(text);
    let mut out = LineBuffer::new(keep_style_codes, text.len());
    let mut i = 0;

    while i < tokens.len() {
        i = match tokens[i] {
            Token::Text(s) => {
                out.push_text(s);
                i + 1
            }
            Token::LineFeed | Token::CarriageReturn => line_boundary(&tokens, i, &mut out),
            Token::Backspace => {
                out.backspace();
                i + 1
            }
            Token::Control(_) => i + 1,
            Token::Sequence(seq) => {
                out.push_sequence(&seq);
                i + 1
            }
        };
    }

    out.finish()
}

/// Cursor/erase run following a line boundary.
#[derive(Debug, Default)]
struct Burst<'a> {
    end: usize,
    cursor_codes: usize,
    relocates: bool,
    erases: bool,
    styles: Vec<&'a str>,
}

impl<'a> Burst<'a> {
    /// Collects cursor and erase codes starting at `start`. Style codes and
    /// invisible sequences may be interleaved; anything else ends the run.
    fn scan(tokens: &[Token<'a>], start: usize) -> Self {
        let mut burst = Burst {
            end: start,
            ..Default::default()
        };
        while let Some(Token::Sequence(seq)) = tokens.get(burst.end) {
            match seq.kind {
                _ if seq.is_cursor_control() => {
                    burst.cursor_codes += 1;
                    burst.relocates |= seq.relocates_row();
                    burst.erases |= seq.kind == SequenceKind::Erase;
                }
                SequenceKind::Sgr => burst.styles.push(seq.raw),
                SequenceKind::Osc | SequenceKind::PrivateMode | SequenceKind::Escape => {}
                _ => break,
            }
            burst.end += 1;
        }
        burst
    }
}

/// Handles the CR or LF at `i` together with any redraw burst after it.
/// Returns the index of the next token to process.
fn line_boundary(tokens: &[Token<'_>], i: usize, out: &mut LineBuffer) -> usize {
    let is_cr = tokens[i] == Token::CarriageReturn;
    let mut next = i + 1;
    if is_cr {
        while tokens.get(next) == Some(&Token::CarriageReturn) {
            next += 1;
        }
    }

    // invisible sequences between CR and LF must not split a CRLF pair
    let burst = Burst::scan(tokens, next);
    if burst.cursor_codes == 0 {
        out.boundary(is_cr, tokens.get(burst.end));
        for style in &burst.styles {
            out.push_style(style);
        }
        return burst.end;
    }

    if burst.relocates {
        // Redraw of an earlier row: drop the boundary, the burst and the
        // redrawn text up to the next line boundary.
        trace!(cursor_codes = burst.cursor_codes, "Dropping cursor relocation burst");
        for style in &burst.styles {
            out.push_style(style);
        }
        let mut k = burst.end;
        while let Some(token) = tokens.get(k) {
            match token {
                Token::LineFeed | Token::CarriageReturn => break,
                Token::Sequence(seq) if seq.kind == SequenceKind::Sgr => out.push_style(seq.raw),
                _ => {}
            }
            k += 1;
        }
        return k;
    }

    // After an LF, forward/back moves and erases are dropped but the text
    // after them stays, so grep's `\x1b[K` output survives.
    if is_cr && burst.erases {
        // `\r` + erase-line: the current line is redrawn in place.
        out.wipe_line();
    } else {
        out.boundary(is_cr, tokens.get(burst.end));
    }
    for style in &burst.styles {
        out.push_style(style);
    }
    burst.end
}

/// Output buffer that knows where the current line starts.
struct LineBuffer {
    out: String,
    keep_style_codes: bool,
    line_start: usize,
    /// End of the last escape sequence written; backspace never crosses it.
    floor: usize,
    /// Style codes written on the current line, replayed when it is wiped.
    line_styles: String,
    line_has_text: bool,
}

impl LineBuffer {
    fn new(keep_style_codes: bool, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            keep_style_codes,
            line_start: 0,
            floor: 0,
            line_styles: String::new(),
            line_has_text: false,
        }
    }

    fn push_text(&mut self, s: &str) {
        self.out.push_str(s);
        self.line_has_text |= !s.is_empty();
    }

    fn push_style(&mut self, raw: &str) {
        if self.keep_style_codes {
            self.out.push_str(raw);
            self.line_styles.push_str(raw);
            self.floor = self.out.len();
        }
    }

    fn push_sequence(&mut self, seq: &Sequence<'_>) {
        match seq.kind {
            SequenceKind::Sgr => self.push_style(seq.raw),
            SequenceKind::Csi if self.keep_style_codes => {
                self.out.push_str(seq.raw);
                self.floor = self.out.len();
            }
            kind => trace!(?kind, raw = ?seq.raw, "Stripped escape sequence"),
        }
    }

    /// Emits a line ending for a CR or LF. A CR on a line without text is a
    /// no-op, and in plain mode a CR followed by LF or another CR leaves the
    /// line ending to that token.
    fn boundary(&mut self, is_cr: bool, following: Option<&Token<'_>>) {
        if !is_cr {
            self.start_line('\n');
        } else if !self.line_has_text {
            // already at column 0
        } else if self.keep_style_codes {
            self.start_line('\r');
        } else if !matches!(following, Some(Token::LineFeed | Token::CarriageReturn)) {
            self.start_line('\n');
        }
    }

    fn start_line(&mut self, terminator: char) {
        self.out.push(terminator);
        self.line_start = self.out.len();
        self.floor = self.line_start;
        self.line_styles.clear();
        self.line_has_text = false;
    }

    fn wipe_line(&mut self) {
        self.out.truncate(self.line_start);
        self.out.push_str(&self.line_styles);
        self.floor = self.out.len();
        self.line_has_text = false;
    }

    fn backspace(&mut self) {
        if self.out.len() > self.floor {
            self.out.pop();
        }
    }

    fn finish(self) -> String {
        if self.keep_style_codes {
            self.out
        } else {
            collapse_blank_lines(&self.out)
        }
    }
}

/// Collapses runs of three or more newlines to exactly two.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0;
    for c in text.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines > 2 {
                continue;
            }
        } else {
            newlines = 0;
        }
        out.push(c);
    }
    out
}
