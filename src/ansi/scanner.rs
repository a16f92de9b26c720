//! Single-pass tokenizer for captured terminal output.
//!
//! Splits a stream into printable text runs, line control characters and
//! classified escape sequences. The scanner is total: every input yields a
//! token stream, and malformed or cut-off sequences come out as
//! [`SequenceKind::Truncated`] instead of failing.

const ESC: u8 = 0x1b;
const BEL: u8 = 0x07;

/// Category of an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Operating system command (`ESC ]`) or another control string
    /// (DCS, SOS, PM, APC), e.g. window title updates.
    Osc,
    /// `CSI ? ...` forms: DEC private mode set/reset (bracketed paste,
    /// alternate screen, cursor visibility).
    PrivateMode,
    /// Relative cursor movement and column positioning (`CSI n A` .. `CSI n G`).
    CursorMove,
    /// Absolute cursor positioning (`CSI row;col H` / `f`).
    CursorPosition,
    /// Erase in display or line (`CSI n J` / `CSI n K`).
    Erase,
    /// Select Graphic Rendition (`CSI params m`).
    Sgr,
    /// Any other well-formed CSI sequence.
    Csi,
    /// Short escape: `ESC` + intermediates + final (`ESC 7`, `ESC ( B`, `ESC =`).
    Escape,
    /// Malformed or incomplete sequence.
    Truncated,
}

/// A classified escape sequence borrowed from the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence<'a> {
    pub kind: SequenceKind,
    /// Full sequence text, including the leading ESC.
    pub raw: &'a str,
    /// CSI parameter bytes; empty for non-CSI sequences.
    pub params: &'a str,
    /// CSI final byte.
    pub action: Option<char>,
}

impl<'a> Sequence<'a> {
    /// Semicolon-separated SGR parameters. `ESC [ m` yields `[""]`.
    pub fn sgr_params(&self) -> Vec<&'a str> {
        self.params.split(';').collect()
    }

    /// True for cursor/erase sequences that can start a redraw burst.
    pub fn is_cursor_control(&self) -> bool {
        matches!(
            self.kind,
            SequenceKind::CursorMove | SequenceKind::CursorPosition | SequenceKind::Erase
        )
    }

    /// True when the sequence moves the cursor to another row or to an
    /// absolute position.
    pub fn relocates_row(&self) -> bool {
        match self.kind {
            SequenceKind::CursorPosition => true,
            SequenceKind::CursorMove => matches!(self.action, Some('A' | 'B' | 'E' | 'F')),
            _ => false,
        }
    }
}

/// One lexical unit of terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Run of printable characters (tab included).
    Text(&'a str),
    LineFeed,
    CarriageReturn,
    Backspace,
    /// Any other C0 control, DEL, or C1 control character.
    Control(char),
    Sequence(Sequence<'a>),
}

/// Iterator over the tokens of a captured stream.
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.input[self.pos..];
        let c = rest.chars().next()?;

        let (token, len) = match c {
            '\x1b' => {
                let seq = scan_escape(rest);
                (Token::Sequence(seq), seq.raw.len())
            }
            '\n' => (Token::LineFeed, 1),
            '\r' => (Token::CarriageReturn, 1),
            '\x08' => (Token::Backspace, 1),
            c if is_control(c) => (Token::Control(c), c.len_utf8()),
            _ => {
                let end = rest.find(is_control).unwrap_or(rest.len());
                (Token::Text(&rest[..end]), end)
            }
        };

        self.pos += len;
        Some(token)
    }
}

/// Collects all tokens of `input`.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Scanner::new(input).collect()
}

fn is_control(c: char) -> bool {
    (c < ' ' && c != '\t') || c == '\x7f' || ('\u{80}'..='\u{9f}').contains(&c)
}

/// Scans one escape sequence at the start of `s` (which begins with ESC).
fn scan_escape(s: &str) -> Sequence<'_> {
    let bytes = s.as_bytes();
    match bytes.get(1) {
        Some(b'[') => scan_csi(s),
        Some(b']' | b'P' | b'X' | b'^' | b'_') => scan_control_string(s),
        Some(&b) if (0x20..=0x2f).contains(&b) => {
            let mut i = 2;
            while bytes.get(i).is_some_and(|b| (0x20..=0x2f).contains(b)) {
                i += 1;
            }
            match bytes.get(i) {
                Some(b) if (0x30..=0x7e).contains(b) => simple(s, SequenceKind::Escape, i + 1),
                _ => simple(s, SequenceKind::Truncated, i),
            }
        }
        Some(&b) if (0x30..=0x7e).contains(&b) => simple(s, SequenceKind::Escape, 2),
        _ => simple(s, SequenceKind::Truncated, 1),
    }
}

fn simple(s: &str, kind: SequenceKind, len: usize) -> Sequence<'_> {
    Sequence {
        kind,
        raw: &s[..len],
        params: "",
        action: None,
    }
}

fn scan_csi(s: &str) -> Sequence<'_> {
    let bytes = s.as_bytes();
    let mut i = 2;
    while bytes.get(i).is_some_and(|b| (0x30..=0x3f).contains(b)) {
        i += 1;
    }
    let params = &s[2..i];

    let intermediates_start = i;
    while bytes.get(i).is_some_and(|b| (0x20..=0x2f).contains(b)) {
        i += 1;
    }
    let has_intermediates = i > intermediates_start;

    match bytes.get(i) {
        Some(&f) if (0x40..=0x7e).contains(&f) => {
            let action = f as char;
            Sequence {
                kind: classify_csi(params, has_intermediates, action),
                raw: &s[..i + 1],
                params,
                action: Some(action),
            }
        }
        _ => Sequence {
            kind: SequenceKind::Truncated,
            raw: &s[..i],
            params,
            action: None,
        },
    }
}

fn classify_csi(params: &str, has_intermediates: bool, action: char) -> SequenceKind {
    if params.starts_with('?') {
        return SequenceKind::PrivateMode;
    }
    let numeric = params
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b';' || b == b':');
    if has_intermediates || !numeric {
        return SequenceKind::Csi;
    }
    match action {
        'm' => SequenceKind::Sgr,
        'A'..='G' => SequenceKind::CursorMove,
        'H' | 'f' => SequenceKind::CursorPosition,
        'J' | 'K' => SequenceKind::Erase,
        _ => SequenceKind::Csi,
    }
}

/// OSC and friends end at BEL or `ESC \`. A stray ESC or a newline also ends
/// the string (without being consumed) so an unterminated title cannot
/// swallow the rest of the log.
fn scan_control_string(s: &str) -> Sequence<'_> {
    let bytes = s.as_bytes();
    let mut i = 2;
    let len = loop {
        match bytes.get(i) {
            None => break i,
            Some(&BEL) => break i + 1,
            Some(&ESC) if bytes.get(i + 1) == Some(&b'\\') => break i + 2,
            Some(&ESC) | Some(b'\n') => break i,
            Some(_) => i += 1,
        }
    };
    simple(s, SequenceKind::Osc, len)
}
